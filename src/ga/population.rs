//! The current generation and the operations that replace it.
//!
//! A [`Population`] moves through two states:
//!
//! ```text
//! RUNNING --step()--> RUNNING --step()--> ... --> CONVERGED
//! ```
//!
//! Each [`step`](Population::step) is natural selection, then generation of
//! a wholly new set of children, then fitness recalculation. Once a genome
//! matches the target the population is finished and further steps do nothing.

use super::config::GaConfig;
use super::genome::Genome;
use super::selection::MatingPool;
use super::types::{best_of, mean_fitness, top_k};
use crate::error::{GaError, Result};
use crate::random::rng_from_seed;
use log::debug;
use rand::rngs::StdRng;
use std::fmt;

/// A fixed-size generation of genomes evolving toward one target.
///
/// Owns its random number generator, so two populations built from the
/// same seed and inputs evolve identically.
#[derive(Debug, Clone)]
pub struct Population {
    target: Vec<char>,
    mutation_rate: f64,
    genomes: Vec<Genome>,
    mating_pool: Option<MatingPool>,
    finished: bool,
    rng: StdRng,
}

impl Population {
    /// Builds and scores the initial population described by `config`.
    ///
    /// # Errors
    /// Any [`GaConfig::validate`] failure.
    pub fn new(config: &GaConfig) -> Result<Self> {
        Self::from_config(config, rng_from_seed(config.seed))
    }

    /// Like [`new`](Self::new), but with a caller-supplied generator.
    ///
    /// # Errors
    /// Any [`GaConfig::validate`] failure.
    pub fn from_config(config: &GaConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        Self::build(
            config.target_chars(),
            config.mutation_rate,
            config.population_size,
            rng,
        )
    }

    /// Builds and scores `size` random genomes of `target`'s character length.
    ///
    /// # Errors
    /// [`GaError::EmptyTarget`], [`GaError::InvalidMutationRate`], or
    /// [`GaError::InvalidPopulationSize`].
    pub fn with_rng(target: &str, mutation_rate: f64, size: usize, rng: StdRng) -> Result<Self> {
        Self::from_config(&GaConfig::new(target, mutation_rate, size), rng)
    }

    fn build(target: Vec<char>, mutation_rate: f64, size: usize, mut rng: StdRng) -> Result<Self> {
        let genomes = (0..size)
            .map(|_| Genome::random(target.len(), &mut rng))
            .collect();

        let mut population = Self {
            target,
            mutation_rate,
            genomes,
            mating_pool: None,
            finished: false,
            rng,
        };
        population.calc_fitness()?;

        debug!(
            "initial population: {} genomes of length {}, best fitness {:.4}",
            population.len(),
            population.target.len(),
            population.best().fitness()
        );
        Ok(population)
    }

    /// Scores every genome against the target and updates the finished flag.
    pub fn calc_fitness(&mut self) -> Result<()> {
        for genome in &mut self.genomes {
            genome.calc_fitness(&self.target)?;
        }
        self.finished = self.best().fitness() == 1.0;
        Ok(())
    }

    /// Rebuilds the mating pool from the current fitness values.
    pub fn natural_selection(&mut self) {
        self.mating_pool = Some(MatingPool::build(&self.genomes));
    }

    /// Replaces the population with the same number of children.
    ///
    /// Each child comes from two independent draws from the mating pool
    /// (a genome may pair with itself), single-point crossover, then
    /// mutation. The pool is consumed. Children are unscored until the next
    /// [`calc_fitness`](Self::calc_fitness).
    ///
    /// # Errors
    /// [`GaError::EmptyMatingPool`] if no pool was built or it has no slots.
    pub fn generate(&mut self) -> Result<()> {
        let pool = self.mating_pool.take().ok_or(GaError::EmptyMatingPool)?;

        let mut children = Vec::with_capacity(self.genomes.len());
        for _ in 0..self.genomes.len() {
            let a = pool.select(&mut self.rng)?;
            let b = pool.select(&mut self.rng)?;

            let mut child = self.genomes[a].crossover(&self.genomes[b], &mut self.rng)?;
            child.mutate(self.mutation_rate, &mut self.rng);
            children.push(child);
        }

        self.genomes = children;
        Ok(())
    }

    /// One full generation: selection, reproduction, evaluation.
    ///
    /// Does nothing once the population has converged.
    pub fn step(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.natural_selection();
        self.generate()?;
        self.calc_fitness()
    }

    /// The fittest genome (the last one on ties).
    pub fn best(&self) -> &Genome {
        best_of(&self.genomes).expect("population is never empty")
    }

    /// Mean fitness across the population.
    pub fn average_fitness(&self) -> f64 {
        mean_fitness(&self.genomes)
    }

    /// The `k` fittest genomes in ascending order, best last.
    pub fn top(&self, k: usize) -> Vec<&Genome> {
        top_k(&self.genomes, k)
    }

    /// Whether some genome matched the target at the last evaluation.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// The mating pool built by the last [`natural_selection`](Self::natural_selection),
    /// if [`generate`](Self::generate) has not consumed it yet.
    pub fn mating_pool(&self) -> Option<&MatingPool> {
        self.mating_pool.as_ref()
    }

    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Genome> {
        self.genomes.iter()
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Genome;
    type IntoIter = std::slice::Iter<'a, Genome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Genome;

    fn index(&self, idx: usize) -> &Genome {
        &self.genomes[idx]
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for genome in &self.genomes {
            writeln!(f, "{genome}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn population(target: &str, rate: f64, size: usize, seed: u64) -> Population {
        Population::with_rng(target, rate, size, create_rng(seed)).unwrap()
    }

    #[test]
    fn test_construction_scores_everything() {
        let pop = population("HELLO WORLD", 0.01, 50, 42);
        assert_eq!(pop.len(), 50);
        assert_eq!(pop.target().len(), 11);
        for genome in &pop {
            assert_eq!(genome.len(), 11);
            let expected = genome
                .genes()
                .iter()
                .zip(pop.target())
                .filter(|(g, t)| g == t)
                .count() as f64
                / 11.0;
            assert!((genome.fitness() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_construction_rejects_bad_inputs() {
        assert_eq!(
            Population::with_rng("", 0.1, 10, create_rng(1)).unwrap_err(),
            GaError::EmptyTarget
        );
        assert_eq!(
            Population::with_rng("abc", 0.1, 0, create_rng(1)).unwrap_err(),
            GaError::InvalidPopulationSize(0)
        );
        assert_eq!(
            Population::with_rng("abc", 2.0, 10, create_rng(1)).unwrap_err(),
            GaError::InvalidMutationRate(2.0)
        );
        assert!(Population::new(&GaConfig::default().with_max_generations(0)).is_err());
    }

    #[test]
    fn test_generate_requires_mating_pool() {
        let mut pop = population("abc", 0.1, 10, 1);
        assert_eq!(pop.generate(), Err(GaError::EmptyMatingPool));
    }

    #[test]
    fn test_generate_consumes_pool() {
        let mut pop = population("abc", 0.1, 10, 1);
        pop.natural_selection();
        assert!(pop.mating_pool().is_some());
        pop.generate().unwrap();
        assert!(pop.mating_pool().is_none());
        assert_eq!(pop.generate(), Err(GaError::EmptyMatingPool));
    }

    #[test]
    fn test_step_keeps_size() {
        let mut pop = population("METHINKS", 0.05, 37, 9);
        for _ in 0..20 {
            pop.step().unwrap();
            assert_eq!(pop.len(), 37);
            assert!(pop.iter().all(|g| g.len() == 8));
        }
    }

    #[test]
    fn test_size_one_mates_with_itself() {
        let mut pop = population("ab", 0.5, 1, 3);
        for _ in 0..50 {
            pop.step().unwrap();
            assert_eq!(pop.len(), 1);
        }
    }

    #[test]
    fn test_finished_iff_best_is_one() {
        let mut pop = population("AB", 0.05, 200, 42);
        for _ in 0..500 {
            assert_eq!(pop.is_finished(), pop.best().fitness() == 1.0);
            if pop.is_finished() {
                break;
            }
            pop.step().unwrap();
        }
        assert!(pop.is_finished());
        assert_eq!(pop.best().to_string(), "AB");
    }

    #[test]
    fn test_step_after_convergence_is_noop() {
        let mut pop = population("A", 0.1, 300, 5);
        while !pop.is_finished() {
            pop.step().unwrap();
        }
        let before: Vec<String> = pop.iter().map(ToString::to_string).collect();
        pop.step().unwrap();
        let after: Vec<String> = pop.iter().map(ToString::to_string).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_average_bounded_by_best() {
        let mut pop = population("to be or not to be", 0.01, 100, 11);
        for _ in 0..30 {
            let avg = pop.average_fitness();
            assert!(avg >= 0.0);
            assert!(avg <= pop.best().fitness() + 1e-12);
            pop.step().unwrap();
        }
    }

    #[test]
    fn test_top_is_ascending_and_ends_with_best() {
        let pop = population("evolution", 0.01, 60, 8);
        let top = pop.top(10);
        assert_eq!(top.len(), 10);
        for pair in top.windows(2) {
            assert!(pair[0].fitness() <= pair[1].fitness());
        }
        assert_eq!(top[9].fitness(), pop.best().fitness());
        assert_eq!(pop.top(100).len(), 60);
    }

    #[test]
    fn test_same_seed_same_history() {
        let mut a = population("same seed", 0.02, 80, 1234);
        let mut b = population("same seed", 0.02, 80, 1234);
        for _ in 0..25 {
            a.step().unwrap();
            b.step().unwrap();
            assert_eq!(a.genomes(), b.genomes());
        }
    }

    #[test]
    fn test_unmatchable_target_never_finishes() {
        let mut pop = population("a!", 0.05, 50, 2);
        for _ in 0..100 {
            pop.step().unwrap();
        }
        assert!(!pop.is_finished());
        assert!(pop.best().fitness() <= 0.5);
    }

    #[test]
    fn test_zero_fitness_population_selects_uniformly() {
        // neither character can ever be drawn, so every genome scores zero
        let mut pop = population("!!", 0.05, 25, 13);
        assert_eq!(pop.best().fitness(), 0.0);

        for _ in 0..10 {
            pop.natural_selection();
            let pool = pop.mating_pool().expect("pool was just built");
            assert_eq!(pool.len(), 25);
            assert!((0..25).all(|idx| pool.copies_of(idx) == 1));

            pop.generate().unwrap();
            pop.calc_fitness().unwrap();
            assert_eq!(pop.len(), 25);
            assert_eq!(pop.average_fitness(), 0.0);
            assert!(!pop.is_finished());
        }
        for _ in 0..10 {
            pop.step().unwrap();
            assert_eq!(pop.len(), 25);
        }
    }

    #[test]
    fn test_target_length_counts_characters() {
        let pop = population("naïve", 0.01, 5, 4);
        assert_eq!(pop.target().len(), 5);
        assert!(pop.iter().all(|g| g.len() == 5));
        // 'ï' is outside the alphabet, so at most 4 of 5 positions can match
        assert!(pop.best().fitness() <= 0.8);

        let config = GaConfig::new("naïve", 0.01, 5);
        let from_config = Population::from_config(&config, create_rng(4)).unwrap();
        assert_eq!(from_config.genomes(), pop.genomes());
    }

    #[test]
    fn test_best_of_single_genome() {
        let pop = population("solo", 0.01, 1, 21);
        assert_eq!(pop.best(), &pop[0]);
        assert_eq!(pop.top(3).len(), 1);
    }

    #[test]
    fn test_display_one_line_per_genome() {
        let pop = population("xyz", 0.1, 4, 6);
        let rendered = pop.to_string();
        assert_eq!(rendered.lines().count(), 4);
        assert_eq!(rendered.lines().next(), Some(pop[0].to_string().as_str()));
    }
}
