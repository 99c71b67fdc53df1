//! Prim's minimum spanning tree with a lazy-deletion heap.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::graph::CityGraph;

/// An undirected weighted edge between two graph vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub weight: f64,
}

/// A candidate edge crossing the visited boundary.
///
/// Ordered by weight first (via `total_cmp`, so the heap has a total
/// order over floats), then by endpoints, which fixes the pop order of
/// equal-weight edges and with it the tie-breaking of the whole tree.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    weight: f64,
    from: usize,
    to: usize,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.from.cmp(&other.from))
            .then(self.to.cmp(&other.to))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prim's algorithm over the complete city graph.
///
/// Starts from vertex 0 (first city in input order) so the tree is
/// reproducible. Candidate edges are never removed from the heap when
/// their endpoint gets visited by another edge; stale entries are
/// skipped on pop instead.
///
/// # Errors
///
/// `InvariantViolation` when fewer than n−1 edges come out — impossible
/// on a complete graph, so this only fires on an internal bug.
pub fn minimum_spanning_tree(graph: &CityGraph) -> Result<Vec<Edge>> {
    let n = graph.len();
    let mut visited = vec![false; n];
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut heap = BinaryHeap::new();

    visited[0] = true;
    for (to, weight) in graph.neighbors(0) {
        heap.push(Reverse(Candidate { weight, from: 0, to }));
    }

    while let Some(Reverse(candidate)) = heap.pop() {
        if visited[candidate.to] {
            continue;
        }
        visited[candidate.to] = true;
        edges.push(Edge {
            a: candidate.from,
            b: candidate.to,
            weight: candidate.weight,
        });
        for (to, weight) in graph.neighbors(candidate.to) {
            if !visited[to] {
                heap.push(Reverse(Candidate {
                    weight,
                    from: candidate.to,
                    to,
                }));
            }
        }
    }

    if edges.len() != n - 1 {
        return Err(Error::invariant(format!(
            "spanning tree has {} edges, expected {}",
            edges.len(),
            n - 1
        )));
    }
    Ok(edges)
}
