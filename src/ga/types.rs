//! Core trait and ordering helpers for the GA.
//!
//! Individuals are compared by fitness alone. Rather than overloading
//! comparison operators on [`Genome`](super::Genome), every sort, max, and
//! average in the crate goes through the functions in this module.

use std::cmp::Ordering;

/// A scored candidate solution.
///
/// Fitness is a fraction in `[0, 1]`; higher is better and `1.0` is an
/// exact match.
pub trait Individual {
    /// Returns the fitness from the last evaluation.
    fn fitness(&self) -> f64;
}

/// Ascending order by fitness. Equal fitness compares `Equal` regardless of content.
pub fn by_fitness<I: Individual>(a: &I, b: &I) -> Ordering {
    a.fitness().total_cmp(&b.fitness())
}

/// Returns the individual with the highest fitness.
///
/// Ties resolve to the last maximal element, as [`Iterator::max_by`] does.
/// Returns `None` for an empty slice.
pub fn best_of<I: Individual>(population: &[I]) -> Option<&I> {
    population.iter().max_by(|a, b| by_fitness(*a, *b))
}

/// Arithmetic mean of all fitness values (0 for an empty slice).
pub fn mean_fitness<I: Individual>(population: &[I]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(Individual::fitness).sum::<f64>() / population.len() as f64
}

/// The `k` fittest individuals, in ascending fitness order (best last).
///
/// Sorts a copy of the references stably, then keeps the tail. Returns the
/// whole population when `k` exceeds its size.
pub fn top_k<I: Individual>(population: &[I], k: usize) -> Vec<&I> {
    let mut sorted: Vec<&I> = population.iter().collect();
    sorted.sort_by(|a, b| by_fitness(*a, *b));
    let start = sorted.len().saturating_sub(k);
    sorted.split_off(start)
}
