//! Seeded random number generation.
//!
//! Every [`Population`](crate::ga::Population) owns exactly one generator
//! created here. There is no process-wide random state, so a fixed seed
//! reproduces a run generation for generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing one from entropy when absent.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    create_rng(seed.unwrap_or_else(rand::random))
}
