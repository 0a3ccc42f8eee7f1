//! GA configuration.
//!
//! [`GaConfig`] holds the three run inputs (target, mutation rate, population
//! size) plus the knobs the runner needs: seed, generation cap, leaderboard size.

use crate::error::{GaError, Result};

/// The classic target from Dawkins' weasel program.
pub const DEFAULT_TARGET: &str = "METHINKS IT IS LIKE A WEASEL";

/// Configuration for one evolutionary run.
///
/// # Defaults
///
/// ```
/// use weasel::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.target, "METHINKS IT IS LIKE A WEASEL");
/// ```
///
/// # Builder Pattern
///
/// ```
/// use weasel::ga::GaConfig;
///
/// let config = GaConfig::new("To be or not to be.", 0.01, 500)
///     .with_seed(42)
///     .with_max_generations(10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// The string the population evolves toward. Must not be empty.
    ///
    /// Characters outside the genome alphabet can never be matched, so a
    /// target containing them will not converge.
    pub target: String,

    /// Per-character probability of a random redraw after crossover (0.0–1.0).
    ///
    /// Typical range: 0.005–0.05.
    pub mutation_rate: f64,

    /// Number of genomes per generation. Must be at least 1.
    pub population_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional cap on the number of generations.
    ///
    /// `None` runs until a genome matches the target (the default).
    pub max_generations: Option<usize>,

    /// Number of genomes reported in each generation's leaderboard.
    pub top_k: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            mutation_rate: 0.01,
            population_size: 200,
            seed: None,
            max_generations: None,
            top_k: 10,
        }
    }
}

impl GaConfig {
    /// Creates a configuration from the three run inputs.
    pub fn new(target: impl Into<String>, mutation_rate: f64, population_size: usize) -> Self {
        Self {
            target: target.into(),
            mutation_rate,
            population_size,
            ..Self::default()
        }
    }

    /// Sets the target string.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the mutation rate. Out-of-range values are rejected by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the run at `n` generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the leaderboard length.
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Target as a character vector, the unit genomes are measured in.
    ///
    /// Length is counted in `char`s, so `"naïve"` has five positions.
    pub fn target_chars(&self) -> Vec<char> {
        self.target.chars().collect()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// The first invalid parameter found, as a [`GaError`].
    pub fn validate(&self) -> Result<()> {
        validate_inputs(&self.target, self.mutation_rate, self.population_size)?;
        if self.max_generations == Some(0) {
            return Err(GaError::InvalidMaxGenerations);
        }
        Ok(())
    }
}

/// Checks the three inputs every population is built from.
fn validate_inputs(
    target: &str,
    mutation_rate: f64,
    population_size: usize,
) -> Result<()> {
    if target.is_empty() {
        return Err(GaError::EmptyTarget);
    }
    if !(0.0..=1.0).contains(&mutation_rate) {
        return Err(GaError::InvalidMutationRate(mutation_rate));
    }
    if population_size == 0 {
        return Err(GaError::InvalidPopulationSize(population_size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.target, DEFAULT_TARGET);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert_eq!(config.population_size, 200);
        assert!(config.seed.is_none());
        assert!(config.max_generations.is_none());
        assert_eq!(config.top_k, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_target("AB")
            .with_mutation_rate(0.05)
            .with_population_size(50)
            .with_seed(42)
            .with_max_generations(500)
            .with_top_k(3);

        assert_eq!(config.target, "AB");
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_generations, Some(500));
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn test_new() {
        let config = GaConfig::new("hi", 0.1, 7);
        assert_eq!(config.target, "hi");
        assert_eq!(config.population_size, 7);
        assert_eq!(config.top_k, 10);
    }

    #[test]
    fn test_validate_empty_target() {
        let config = GaConfig::default().with_target("");
        assert_eq!(config.validate(), Err(GaError::EmptyTarget));
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(GaError::InvalidPopulationSize(0)));
    }

    #[test]
    fn test_validate_population_of_one() {
        let config = GaConfig::default().with_population_size(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_mutation_rate_bounds() {
        assert!(GaConfig::default().with_mutation_rate(0.0).validate().is_ok());
        assert!(GaConfig::default().with_mutation_rate(1.0).validate().is_ok());
        assert_eq!(
            GaConfig::default().with_mutation_rate(1.5).validate(),
            Err(GaError::InvalidMutationRate(1.5))
        );
        assert!(GaConfig::default()
            .with_mutation_rate(-0.1)
            .validate()
            .is_err());
        assert!(GaConfig::default()
            .with_mutation_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_generation_cap() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(GaError::InvalidMaxGenerations));
    }

    #[test]
    fn test_target_chars_counts_characters() {
        let config = GaConfig::default().with_target("naïve");
        assert_eq!(config.target_chars().len(), 5);
    }
}
