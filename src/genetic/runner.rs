//! GA generational loop.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::graph::CityGraph;
use crate::random::create_rng;
use crate::tour::{evaluate, Tour};

use super::config::GeneticConfig;
use super::operators::{order_crossover, swap_mutation};
use super::selection::roulette;

/// Result of a genetic-algorithm run.
#[derive(Debug, Clone)]
pub struct GeneticResult {
    /// Best tour observed across all generations.
    pub best: Tour,

    /// Closed-tour length of `best`.
    pub best_distance: f64,

    /// Number of generations evolved.
    pub generations: usize,

    /// Tracked best distance after each generation's evaluation.
    /// Non-increasing by construction.
    pub distance_history: Vec<f64>,
}

/// Executes the genetic algorithm over the tour space.
pub struct GeneticSolver;

impl GeneticSolver {
    /// Evolves a population of random permutations.
    ///
    /// Each generation: evaluate every tour, update the tracked best,
    /// then build a full replacement population by roulette-selecting
    /// two parents, applying order crossover, and swap-mutating the
    /// child. The tracked best is taken from populations at evaluation
    /// time, so it covers the initial population and never regresses.
    ///
    /// # Errors
    ///
    /// `Config` when the parameters fail validation; `DegenerateInput`
    /// when a tour has zero total distance (coincident coordinates),
    /// which would break the inverse-distance fitness.
    pub fn solve(graph: &CityGraph, config: &GeneticConfig) -> Result<GeneticResult> {
        config.validate()?;

        let mut rng = create_rng(config.seed);
        let n = graph.len();

        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| Tour::random(n, &mut rng))
            .collect();

        let mut best: Option<(Tour, f64)> = None;
        let mut distance_history = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            let distances = evaluate_population(graph, &population)?;

            let mut fitness = Vec::with_capacity(distances.len());
            for &d in &distances {
                if d == 0.0 {
                    return Err(Error::degenerate(
                        "tour with zero total distance; inverse-distance fitness undefined",
                    ));
                }
                fitness.push(1.0 / d);
            }

            // Track the best of this population before replacing it.
            let (gen_best, gen_best_distance) = distances
                .iter()
                .enumerate()
                .min_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, &d)| (i, d))
                .expect("population is never empty");
            if best
                .as_ref()
                .is_none_or(|&(_, d)| gen_best_distance < d)
            {
                best = Some((population[gen_best].clone(), gen_best_distance));
            }
            let tracked = best.as_ref().expect("set above").1;
            distance_history.push(tracked);
            log::debug!(
                "genetic: generation={generation} generation_best={gen_best_distance:.3} \
                 tracked_best={tracked:.3}"
            );

            let mut next = Vec::with_capacity(config.population_size);
            while next.len() < config.population_size {
                let parent1 = &population[roulette(&fitness, &mut rng)];
                let parent2 = &population[roulette(&fitness, &mut rng)];
                let mut child = order_crossover(parent1.order(), parent2.order(), &mut rng);
                swap_mutation(&mut child, config.mutation_rate, &mut rng);
                next.push(Tour::new(child));
            }
            population = next;
        }

        let (best, best_distance) = best.expect("generations >= 1 evaluated at least once");
        Ok(GeneticResult {
            best,
            best_distance,
            generations: config.generations,
            distance_history,
        })
    }
}

/// Closed-tour distance of every population member.
fn evaluate_population(graph: &CityGraph, population: &[Tour]) -> Result<Vec<f64>> {
    #[cfg(feature = "parallel")]
    {
        population
            .par_iter()
            .map(|tour| evaluate(graph, tour))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        population.iter().map(|tour| evaluate(graph, tour)).collect()
    }
}
