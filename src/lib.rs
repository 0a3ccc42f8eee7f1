//! Evolving random strings into a known target: the weasel program.
//!
//! A didactic genetic algorithm in the spirit of Dawkins' *METHINKS IT IS
//! LIKE A WEASEL* and the infinite monkey theorem:
//!
//! - **Genome**: a fixed-length string over ASCII letters, space, `.` and `?`
//! - **Fitness**: fraction of positions matching the target
//! - **Selection**: fitness-proportionate, through a discretized mating pool
//! - **Reproduction**: single-point crossover, then per-character mutation
//! - **Convergence**: some genome equals the target exactly
//!
//! # Architecture
//!
//! The engine in [`ga`] exposes plain data after every generation (best
//! genome, average fitness, leaderboard, finished flag). Rendering and
//! argument parsing live in the `weasel` binary. Randomness comes from a
//! generator owned by each population, created through [`random`].
//!
//! ```
//! use weasel::ga::{GaConfig, Population};
//!
//! let config = GaConfig::new("HI", 0.05, 100).with_seed(1);
//! let mut population = Population::new(&config).unwrap();
//! while !population.is_finished() {
//!     population.step().unwrap();
//! }
//! assert_eq!(population.best().to_string(), "HI");
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, Result};
