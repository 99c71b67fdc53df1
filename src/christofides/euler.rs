//! Eulerian circuit extraction and Hamiltonian shortcutting.

use crate::error::{Error, Result};

use super::mst::Edge;

/// Walks an Eulerian circuit over the multigraph and shortcuts it to a
/// Hamiltonian visiting order.
///
/// `edges` is a multiset: a matching edge that duplicates a tree edge
/// appears twice and both instances are traversed independently (each
/// edge instance carries its own id in the adjacency lists). Every
/// vertex must have even degree and the edge set must be connected over
/// `0..n` — both hold for a spanning tree plus an odd-vertex matching.
///
/// The circuit starts at `start`, so the shortcut order begins there
/// too; the returned order is an open permutation of `0..n`, closed
/// implicitly by the evaluator.
///
/// # Errors
///
/// `InvariantViolation` when the circuit cannot consume every edge or
/// the shortcut misses a vertex (disconnected or odd-degree input —
/// unreachable from the Christofides pipeline).
pub fn eulerian_shortcut(n: usize, edges: &[Edge], start: usize) -> Result<Vec<usize>> {
    // Adjacency as (neighbor, edge id); one shared `used` slot per edge
    // instance so parallel edges are consumed separately.
    let mut adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    for (id, e) in edges.iter().enumerate() {
        adjacency[e.a].push((e.b, id));
        adjacency[e.b].push((e.a, id));
    }
    let mut used = vec![false; edges.len()];
    // Per-vertex cursor into the adjacency list keeps the walk linear
    // in the number of edge instances.
    let mut cursor = vec![0usize; n];

    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(edges.len() + 1);
    while let Some(&v) = stack.last() {
        let mut advanced = false;
        while cursor[v] < adjacency[v].len() {
            let (to, id) = adjacency[v][cursor[v]];
            cursor[v] += 1;
            if !used[id] {
                used[id] = true;
                stack.push(to);
                advanced = true;
                break;
            }
        }
        if !advanced {
            circuit.push(v);
            stack.pop();
        }
    }

    if circuit.len() != edges.len() + 1 {
        return Err(Error::invariant(format!(
            "eulerian circuit covered {} of {} edges",
            circuit.len().saturating_sub(1),
            edges.len()
        )));
    }

    // Shortcut: keep each vertex the first time the circuit reaches it.
    let mut seen = vec![false; n];
    let mut order = Vec::with_capacity(n);
    for &v in &circuit {
        if !seen[v] {
            seen[v] = true;
            order.push(v);
        }
    }

    if order.len() != n {
        return Err(Error::invariant(format!(
            "shortcut visited {} of {n} vertices",
            order.len()
        )));
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: usize, b: usize) -> Edge {
        Edge { a, b, weight: 1.0 }
    }

    #[test]
    fn test_triangle_circuit() {
        let edges = [edge(0, 1), edge(1, 2), edge(2, 0)];
        let order = eulerian_shortcut(3, &edges, 0).unwrap();
        assert_eq!(order[0], 0);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);
    }

    #[test]
    fn test_parallel_edges_consumed_independently() {
        // Two vertices joined twice: the circuit must cross both edge
        // instances (0→1→0), the shortcut keeps each vertex once.
        let edges = [edge(0, 1), edge(0, 1)];
        let order = eulerian_shortcut(2, &edges, 0).unwrap();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_figure_eight() {
        // Two triangles sharing vertex 0; all degrees even.
        let edges = [
            edge(0, 1),
            edge(1, 2),
            edge(2, 0),
            edge(0, 3),
            edge(3, 4),
            edge(4, 0),
        ];
        let order = eulerian_shortcut(5, &edges, 0).unwrap();
        assert_eq!(order[0], 0);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_starts_at_designated_vertex() {
        let edges = [edge(0, 1), edge(1, 2), edge(2, 0)];
        let order = eulerian_shortcut(3, &edges, 2).unwrap();
        assert_eq!(order[0], 2);
    }

    #[test]
    fn test_unconsumed_edges_detected() {
        // Vertex 3 is isolated from the start component, so its loop
        // edges can never be reached.
        let edges = [edge(0, 1), edge(1, 0), edge(2, 3), edge(3, 2)];
        let result = eulerian_shortcut(4, &edges, 0);
        assert!(matches!(
            result,
            Err(crate::error::Error::InvariantViolation(_))
        ));
    }
}
