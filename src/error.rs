//! Error type shared by the whole crate.

use thiserror::Error;

/// Errors raised by genome operators, population construction, and the runner.
///
/// Every variant is a configuration or precondition failure. Nothing here is
/// transient, so callers never need to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// The target string has no characters.
    #[error("target must not be empty")]
    EmptyTarget,

    /// The population size is zero.
    #[error("population size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),

    /// The mutation rate is outside `[0, 1]` (or NaN).
    #[error("mutation rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),

    /// A generation cap of zero was requested.
    #[error("max_generations must be at least 1 when set")]
    InvalidMaxGenerations,

    /// Two sequences that must be aligned position by position differ in length.
    #[error("length mismatch: expected {expected} characters, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// Parents were requested but the mating pool holds no slots.
    #[error("mating pool is empty; run natural selection before generating")]
    EmptyMatingPool,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GaError>;
