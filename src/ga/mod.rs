//! Genetic Algorithm for evolving a string toward a fixed target.
//!
//! A population of random strings is scored by how many positions match the
//! target, parents are drawn from a fitness-proportionate mating pool,
//! children are made by single-point crossover and per-character mutation,
//! and the whole generation is replaced. The run ends when a string matches
//! the target exactly.
//!
//! # Key Types
//!
//! - [`Genome`]: one candidate string with its fitness
//! - [`Population`]: the current generation; selection, reproduction, convergence
//! - [`MatingPool`]: discretized roulette wheel rebuilt each generation
//! - [`GaConfig`]: run inputs (target, mutation rate, size) and runner knobs
//! - [`GaRunner`]: executes the generational loop and reports [`GenerationStats`]
//!
//! # Submodules
//!
//! - [`operators`]: alphabet, single-point crossover, and reset mutation on `char` slices
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Dawkins (1986), *The Blind Watchmaker*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod genome;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, DEFAULT_TARGET};
pub use genome::Genome;
pub use population::Population;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::{MatingPool, SLOTS_PER_INDIVIDUAL};
pub use types::{best_of, by_fitness, mean_fitness, top_k, Individual};
