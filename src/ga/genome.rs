//! Candidate string and its two genetic operators.

use super::operators::{self, random_sequence};
use super::types::Individual;
use crate::error::Result;
use rand::Rng;
use std::fmt;

/// One candidate solution: a fixed-length character sequence with a fitness.
///
/// Fitness stays `0.0` until [`calc_fitness`](Genome::calc_fitness) is called;
/// children produced by crossover start unscored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    genes: Vec<char>,
    fitness: f64,
}

impl Genome {
    /// Creates a genome of `len` uniformly random symbols.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::from_genes(random_sequence(len, rng))
    }

    /// Wraps an explicit sequence. Fitness starts at zero.
    pub fn from_genes(genes: Vec<char>) -> Self {
        Self {
            genes,
            fitness: 0.0,
        }
    }

    pub fn genes(&self) -> &[char] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Fitness from the last evaluation.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Scores the genome as the fraction of positions equal to `target`,
    /// stores the score, and returns it.
    ///
    /// An exact match yields exactly `1.0`, since `n / n` is exact in IEEE-754.
    ///
    /// # Errors
    /// [`GaError::LengthMismatch`](crate::GaError::LengthMismatch) if the lengths differ.
    pub fn calc_fitness(&mut self, target: &[char]) -> Result<f64> {
        let hits = operators::matching_positions(&self.genes, target)?;
        self.fitness = if target.is_empty() {
            0.0
        } else {
            hits as f64 / target.len() as f64
        };
        Ok(self.fitness)
    }

    /// Single-point crossover with a uniformly random cut in `0..=len`.
    ///
    /// The child takes `self` before the cut and `partner` from it onward.
    pub fn crossover<R: Rng>(&self, partner: &Genome, rng: &mut R) -> Result<Genome> {
        operators::single_point_crossover(&self.genes, &partner.genes, rng).map(Self::from_genes)
    }

    /// Crossover at a caller-chosen cut point.
    pub fn crossover_at(&self, partner: &Genome, midpoint: usize) -> Result<Genome> {
        operators::crossover_at(&self.genes, &partner.genes, midpoint).map(Self::from_genes)
    }

    /// Redraws each position with probability `rate`. Returns the number of redraws.
    pub fn mutate<R: Rng>(&mut self, rate: f64, rng: &mut R) -> usize {
        operators::reset_mutation(&mut self.genes, rate, rng)
    }

    /// Whether the genes equal `target` character for character.
    pub fn matches(&self, target: &[char]) -> bool {
        self.genes == target
    }
}

impl Individual for Genome {
    fn fitness(&self) -> f64 {
        self.fitness
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.genes.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
