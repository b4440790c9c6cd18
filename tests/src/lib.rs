//! Test suites and shared fixtures for the pkcrypt library
//!
//! Known-answer vectors live as JSON under `src/vectors/kat_json` and are
//! executed through [`suites::kat`].

pub mod suites;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible test runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
