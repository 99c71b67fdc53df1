//! Annealing execution loop.

use rand::seq::index;
use rand::Rng;

use crate::error::Result;
use crate::graph::CityGraph;
use crate::random::create_rng;
use crate::tour::{evaluate, Tour};

use super::config::AnnealingConfig;

/// Result of a simulated-annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult {
    /// The best tour found during the run.
    pub best: Tour,

    /// Closed-tour length of `best`.
    pub best_distance: f64,

    /// Total neighbor evaluations. Fixed by the temperature schedule:
    /// ⌈log(T_min/T₀)/log α⌉.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,
}

/// Executes simulated annealing over the tour space.
pub struct AnnealingSolver;

impl AnnealingSolver {
    /// Runs the annealing loop from a random initial permutation.
    ///
    /// Each iteration swaps two distinct random positions, evaluates
    /// the candidate's full closed-tour distance, applies the
    /// Metropolis criterion, and cools `T ← α·T`. The best tour seen is
    /// tracked separately from the current one and returned.
    ///
    /// # Errors
    /// `Config` when the parameters fail validation.
    pub fn solve(graph: &CityGraph, config: &AnnealingConfig) -> Result<AnnealingResult> {
        config.validate()?;

        let mut rng = create_rng(config.seed);
        let n = graph.len();

        let mut current = Tour::random(n, &mut rng);
        let mut current_distance = evaluate(graph, &current)?;
        let mut best = current.clone();
        let mut best_distance = current_distance;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.min_temperature {
            let picked = index::sample(&mut rng, n, 2);
            let mut candidate = current.clone();
            candidate.swap(picked.index(0), picked.index(1));
            let candidate_distance = evaluate(graph, &candidate)?;
            let delta = candidate_distance - current_distance;

            // Metropolis acceptance criterion.
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random_range(0.0..1.0) < (-delta / temperature).exp()
            };

            if accept {
                current = candidate;
                current_distance = candidate_distance;
                accepted_moves += 1;

                if current_distance < best_distance {
                    best = current.clone();
                    best_distance = current_distance;
                }
            }

            iterations += 1;
            temperature *= config.cooling_factor;
        }

        log::debug!(
            "annealing: iterations={iterations} accepted={accepted_moves} \
             improving={improving_moves} best={best_distance:.3}"
        );

        Ok(AnnealingResult {
            best,
            best_distance,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
        })
    }
}
