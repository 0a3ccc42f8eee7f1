//! Character-sequence genetic operators.
//!
//! Crossover and mutation for fixed-length `char` chromosomes. These work on
//! plain slices so they can be exercised without a population around them.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: prefix of one parent, suffix of the other
//! - [`crossover_at`]: the same, with the cut point supplied by the caller
//!
//! # Mutation
//!
//! - [`reset_mutation`]: independently redraw each position with a fixed probability

use crate::error::{GaError, Result};
use rand::Rng;

/// Symbols a genome may contain: ASCII letters, then space, period, question mark.
pub const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '.',
    '?',
];

/// Returns `true` if `c` can ever appear in a genome.
pub fn in_alphabet(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, ' ' | '.' | '?')
}

/// Draws one symbol uniformly from [`ALPHABET`].
pub fn random_char<R: Rng>(rng: &mut R) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())]
}

/// Builds a sequence of `len` independent uniform draws.
pub fn random_sequence<R: Rng>(len: usize, rng: &mut R) -> Vec<char> {
    (0..len).map(|_| random_char(rng)).collect()
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Picks a cut point `m` uniformly in `0..=n` (both ends inclusive) and
/// returns `parent1[..m] ++ parent2[m..]`. At `m = 0` the child equals
/// `parent2`; at `m = n` it equals `parent1`.
///
/// # Errors
/// [`GaError::LengthMismatch`] if the parents differ in length.
pub fn single_point_crossover<R: Rng>(
    parent1: &[char],
    parent2: &[char],
    rng: &mut R,
) -> Result<Vec<char>> {
    check_lengths(parent1.len(), parent2.len())?;
    let midpoint = rng.random_range(0..=parent1.len());
    crossover_at(parent1, parent2, midpoint)
}

/// Crossover with a fixed cut point. `midpoint` is clamped to the length.
///
/// # Errors
/// [`GaError::LengthMismatch`] if the parents differ in length.
pub fn crossover_at(parent1: &[char], parent2: &[char], midpoint: usize) -> Result<Vec<char>> {
    check_lengths(parent1.len(), parent2.len())?;
    let m = midpoint.min(parent1.len());
    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..m]);
    child.extend_from_slice(&parent2[m..]);
    Ok(child)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Random-reset mutation.
///
/// Each position is replaced, with probability `rate`, by a fresh draw from
/// [`ALPHABET`]. The draw may reproduce the old symbol. Returns how many
/// positions were redrawn.
pub fn reset_mutation<R: Rng>(genes: &mut [char], rate: f64, rng: &mut R) -> usize {
    let mut redrawn = 0;
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < rate {
            *gene = random_char(rng);
            redrawn += 1;
        }
    }
    redrawn
}

/// Hamming hits: positions where `genes` and `target` agree.
///
/// # Errors
/// [`GaError::LengthMismatch`] if the lengths differ.
pub fn matching_positions(genes: &[char], target: &[char]) -> Result<usize> {
    check_lengths(target.len(), genes.len())?;
    Ok(genes.iter().zip(target).filter(|(g, t)| g == t).count())
}

fn check_lengths(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(GaError::LengthMismatch { expected, found });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
