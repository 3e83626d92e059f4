//! Random number generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the RNG every optimizer owns.
///
/// The same seed always yields the same stream, so two optimizers built
/// from identical configurations evolve identically.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seeds from `seed`, or from the thread RNG when `None`.
pub(crate) fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
