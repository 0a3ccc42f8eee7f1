//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives a [`Population`] until it converges:
//! initialization → (selection → reproduction → evaluation → report) → repeat.

use super::config::GaConfig;
use super::genome::Genome;
use super::population::Population;
use crate::error::Result;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Snapshot of one generation, handed to the observer after each step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,

    /// Fittest genome of this generation.
    pub best: Genome,

    /// Same as `best.fitness()`.
    pub best_fitness: f64,

    /// Mean fitness of this generation.
    pub average_fitness: f64,

    /// The `top_k` fittest genomes, ascending (best last).
    pub top: Vec<Genome>,

    /// Whether `best` matches the target.
    pub finished: bool,
}

impl GenerationStats {
    fn capture(generation: usize, population: &Population, top_k: usize) -> Self {
        let best = population.best().clone();
        Self {
            generation,
            best_fitness: best.fitness(),
            best,
            average_fitness: population.average_fitness(),
            top: population.top(top_k).into_iter().cloned().collect(),
            finished: population.is_finished(),
        }
    }
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The fittest genome of the final generation.
    pub best: Genome,

    /// Same as `best.fitness()`.
    pub best_fitness: f64,

    /// Number of generations executed (0 if the initial population already matched).
    pub generations: usize,

    /// Whether a genome matched the target.
    pub converged: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of the initial population, then of each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use weasel::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::new("AB", 0.05, 200).with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert!(result.converged);
/// assert_eq!(result.best.to_string(), "AB");
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs until convergence or the configured generation cap.
    ///
    /// # Errors
    /// Any [`GaConfig::validate`] failure.
    pub fn run(config: &GaConfig) -> Result<GaResult> {
        Self::run_with_observer(config, None, |_| {})
    }

    /// Runs with an optional cancellation token and a per-generation observer.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the current best genome.
    pub fn run_with_observer<F>(
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut on_generation: F,
    ) -> Result<GaResult>
    where
        F: FnMut(&GenerationStats),
    {
        let mut population = Population::new(config)?;

        // the cap is only a safety limit and may be huge; keep the hint small
        let capacity = config.max_generations.map_or(64, |cap| cap.min(1024));
        let mut fitness_history = Vec::with_capacity(capacity.saturating_add(1));
        fitness_history.push(population.best().fitness());

        let mut generations = 0usize;
        let mut cancelled = false;

        while !population.is_finished() {
            if config.max_generations.is_some_and(|cap| generations >= cap) {
                info!("generation cap {generations} reached without a match");
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    info!("run cancelled after {generations} generations");
                    break;
                }
            }

            population.step()?;
            generations += 1;

            let stats = GenerationStats::capture(generations, &population, config.top_k);
            debug!(
                "generation {}: best {:?} ({:.4}), average {:.4}",
                generations,
                stats.best.to_string(),
                stats.best_fitness,
                stats.average_fitness
            );
            fitness_history.push(stats.best_fitness);
            on_generation(&stats);
        }

        let best = population.best().clone();
        if population.is_finished() {
            info!("converged on {:?} after {generations} generations", best.to_string());
        }

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            converged: population.is_finished(),
            cancelled,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
