//! Fitness-proportionate parent selection through a discretized mating pool.
//!
//! Each individual's fitness is rescaled from `[0, max]` to `[0, 1]` and it
//! receives `floor(scaled * 100)` slots in the pool. Parents are then drawn
//! uniformly from the slots, which approximates roulette-wheel selection.
//!
//! The best individual always gets [`SLOTS_PER_INDIVIDUAL`] slots. Anything
//! scaling below `0.01` gets none and cannot reproduce that generation.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*, ch. 1
//! - Dawkins (1986), *The Blind Watchmaker*, ch. 3

use super::types::{best_of, Individual};
use crate::error::{GaError, Result};
use log::{trace, warn};
use rand::Rng;

/// Slots granted to an individual whose fitness equals the population maximum.
pub const SLOTS_PER_INDIVIDUAL: usize = 100;

/// Weighted multiset of population indices, rebuilt every generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatingPool {
    slots: Vec<usize>,
}

impl MatingPool {
    /// Builds the pool for `population`.
    ///
    /// When every individual has zero fitness the rescaling is undefined;
    /// each individual then gets a single slot, making selection uniform.
    pub fn build<I: Individual>(population: &[I]) -> Self {
        let max_fitness = best_of(population).map_or(0.0, Individual::fitness);

        if max_fitness <= 0.0 {
            if !population.is_empty() {
                warn!(
                    "all {} individuals have zero fitness; selecting uniformly",
                    population.len()
                );
            }
            return Self {
                slots: (0..population.len()).collect(),
            };
        }

        let mut slots = Vec::with_capacity(population.len() * SLOTS_PER_INDIVIDUAL / 2);
        for (idx, individual) in population.iter().enumerate() {
            let copies = slot_count(individual.fitness(), max_fitness);
            slots.extend(std::iter::repeat(idx).take(copies));
        }

        trace!(
            "mating pool: {} slots for {} individuals (max fitness {:.4})",
            slots.len(),
            population.len(),
            max_fitness
        );
        Self { slots }
    }

    /// Draws one parent index uniformly from the slots.
    ///
    /// # Errors
    /// [`GaError::EmptyMatingPool`] if the pool holds no slots.
    pub fn select<R: Rng>(&self, rng: &mut R) -> Result<usize> {
        if self.slots.is_empty() {
            return Err(GaError::EmptyMatingPool);
        }
        Ok(self.slots[rng.random_range(0..self.slots.len())])
    }

    /// Total number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots held by population index `idx`.
    pub fn copies_of(&self, idx: usize) -> usize {
        self.slots.iter().filter(|&&s| s == idx).count()
    }
}

/// `floor(fitness / max * 100)`, for `max > 0`.
fn slot_count(fitness: f64, max_fitness: f64) -> usize {
    let scaled = (fitness / max_fitness).clamp(0.0, 1.0);
    (scaled * SLOTS_PER_INDIVIDUAL as f64) as usize
}
