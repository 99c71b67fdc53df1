//! Roulette-wheel parent selection.

use rand::Rng;

/// Fitness-proportionate selection.
///
/// Draws uniformly over `[0, Σfitness)` and returns the index of the
/// first member whose cumulative fitness exceeds the draw. Fitness
/// values are raw selection weights — here 1/distance, so higher is
/// better and no inversion is needed.
///
/// Returns the last index when floating-point accumulation leaves the
/// draw uncovered.
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn roulette<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");
    let n = fitness.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = fitness.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..n);
    }

    let draw = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &f) in fitness.iter().enumerate() {
        cumulative += f;
        if cumulative > draw {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
