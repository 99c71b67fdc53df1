//! Seeded RNG construction shared by the stochastic solvers.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the solver RNG.
///
/// A fixed seed reproduces a run bit-for-bit; `None` draws a fresh seed
/// from the thread RNG. Every randomness source in this crate goes
/// through the returned generator, so the seed on a solver config is
/// the complete description of a stochastic run.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
