//! The Christofides pipeline.

use crate::error::Result;
use crate::graph::CityGraph;
use crate::tour::{evaluate, Tour};

use super::euler::eulerian_shortcut;
use super::matching::min_weight_matching;
use super::mst::minimum_spanning_tree;

/// Result of one Christofides construction.
#[derive(Debug, Clone)]
pub struct ChristofidesResult {
    /// The constructed tour, starting at the first input city.
    pub tour: Tour,

    /// Closed-tour length of `tour`.
    pub length: f64,
}

/// Deterministic tour construction.
///
/// One pass, no randomness, no retries: spanning tree → odd-degree
/// matching → Eulerian circuit → shortcut. Repeated calls on the same
/// graph return the same tour (tie-breaks are fixed by the Prim pop
/// order and the matching scan order).
pub struct ChristofidesSolver;

impl ChristofidesSolver {
    /// Builds one tour over the full city graph.
    ///
    /// # Errors
    ///
    /// Propagates sub-step failures unchanged; all are
    /// `InvariantViolation`s that indicate an internal bug rather than
    /// bad caller input.
    pub fn solve(graph: &CityGraph) -> Result<ChristofidesResult> {
        let n = graph.len();

        let mst = minimum_spanning_tree(graph)?;

        let mut degree = vec![0usize; n];
        for e in &mst {
            degree[e.a] += 1;
            degree[e.b] += 1;
        }
        let odd: Vec<usize> = (0..n).filter(|&v| degree[v] % 2 == 1).collect();
        log::debug!(
            "christofides: n={n} mst_edges={} odd_vertices={}",
            mst.len(),
            odd.len()
        );

        let matching = min_weight_matching(&graph.induced(&odd))?;
        log::debug!("christofides: matching_edges={}", matching.len());

        // The tree plus the matching gives every vertex even degree;
        // the matching may duplicate a tree edge, which the Eulerian
        // walk treats as two independent parallel edges.
        let mut multigraph = mst;
        multigraph.extend(matching);

        let order = eulerian_shortcut(n, &multigraph, 0)?;
        let tour = Tour::new(order);
        let length = evaluate(graph, &tour)?;
        log::debug!("christofides: tour_length={length:.3}");

        Ok(ChristofidesResult { tour, length })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;

    fn euclidean(a: GeoPoint, b: GeoPoint) -> f64 {
        (a.lat - b.lat).hypot(a.lon - b.lon)
    }

    fn planar_graph(points: &[(f64, f64)]) -> CityGraph {
        let cities: Vec<(String, GeoPoint)> = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| (format!("p{i}"), GeoPoint::new(x, y)))
            .collect();
        CityGraph::from_cities_with(&cities, euclidean).unwrap()
    }

    /// Optimal closed-tour length by fixing city 0 and permuting the rest.
    fn brute_force_optimum(graph: &CityGraph) -> f64 {
        fn recurse(graph: &CityGraph, order: &mut Vec<usize>, rest: &mut Vec<usize>, best: &mut f64) {
            if rest.is_empty() {
                let length = evaluate(graph, &Tour::new(order.clone())).unwrap();
                if length < *best {
                    *best = length;
                }
                return;
            }
            for i in 0..rest.len() {
                let v = rest.swap_remove(i);
                order.push(v);
                recurse(graph, order, rest, best);
                order.pop();
                rest.push(v);
                let last = rest.len() - 1;
                rest.swap(i, last);
            }
        }
        let mut best = f64::INFINITY;
        let mut order = vec![0];
        let mut rest: Vec<usize> = (1..graph.len()).collect();
        recurse(graph, &mut order, &mut rest, &mut best);
        best
    }

    #[test]
    fn test_unit_square_is_exact() {
        // Optimal closed tour over the unit square is its perimeter.
        let graph = planar_graph(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let result = ChristofidesSolver::solve(&graph).unwrap();
        assert!(result.tour.is_permutation(4));
        assert!(
            (result.length - 4.0).abs() < 1e-9,
            "expected perimeter 4.0, got {}",
            result.length
        );
    }

    #[test]
    fn test_output_is_permutation_starting_at_first_city() {
        let graph = planar_graph(&[
            (0.0, 0.0),
            (2.0, 1.0),
            (1.0, 3.0),
            (4.0, 0.5),
            (3.0, 2.5),
            (0.5, 1.8),
        ]);
        let result = ChristofidesSolver::solve(&graph).unwrap();
        assert!(result.tour.is_permutation(graph.len()));
        assert_eq!(result.tour.order()[0], 0);
    }

    #[test]
    fn test_within_approximation_bound() {
        let instances: Vec<Vec<(f64, f64)>> = vec![
            vec![(0.0, 0.0), (1.0, 4.0), (3.0, 1.0), (5.0, 3.0), (2.0, 2.0)],
            vec![
                (0.0, 0.0),
                (6.0, 1.0),
                (2.0, 5.0),
                (4.0, 4.0),
                (1.0, 2.0),
                (5.0, 0.5),
                (3.0, 3.0),
            ],
            vec![
                (0.9, 0.1),
                (4.2, 1.7),
                (2.8, 4.9),
                (0.2, 3.3),
                (5.5, 3.9),
                (3.1, 0.8),
                (1.6, 2.2),
                (4.8, 4.4),
            ],
        ];
        for points in instances {
            let graph = planar_graph(&points);
            let result = ChristofidesSolver::solve(&graph).unwrap();
            let optimum = brute_force_optimum(&graph);
            assert!(
                result.length <= 1.5 * optimum + 1e-9,
                "tour {} exceeds 1.5 x optimum {optimum} on {points:?}",
                result.length
            );
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let graph = planar_graph(&[(0.0, 0.0), (1.0, 2.0), (3.0, 1.0), (2.0, 4.0), (4.0, 0.0)]);
        let a = ChristofidesSolver::solve(&graph).unwrap();
        let b = ChristofidesSolver::solve(&graph).unwrap();
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.length, b.length);
    }

    #[test]
    fn test_two_cities() {
        // Degenerate but well-formed: out and back along the one edge.
        let graph = planar_graph(&[(0.0, 0.0), (3.0, 0.0)]);
        let result = ChristofidesSolver::solve(&graph).unwrap();
        assert!(result.tour.is_permutation(2));
        assert!((result.length - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_metric_end_to_end() {
        let cities = [
            ("Paris", GeoPoint::new(48.8566, 2.3522)),
            ("Lyon", GeoPoint::new(45.764, 4.8357)),
            ("Marseille", GeoPoint::new(43.2965, 5.3698)),
            ("Bordeaux", GeoPoint::new(44.8378, -0.5792)),
            ("Nantes", GeoPoint::new(47.2184, -1.5536)),
        ];
        let graph = CityGraph::from_cities(&cities).unwrap();
        let result = ChristofidesSolver::solve(&graph).unwrap();
        assert!(result.tour.is_permutation(5));
        assert!(result.length > 0.0);
    }
}
