//! Minimum-weight perfect matching over the odd-degree vertex set.
//!
//! Exact matching on a general weighted graph is blossom territory; the
//! odd sets this crate meets are bounded by the city count, so an exact
//! subset-DP (O(2^k·k²) time, O(2^k) space) covers the reference path.
//! Past [`MAX_EXACT`] vertices a deterministic greedy nearest-pair pass
//! takes over, trading the optimality of the matching step for
//! tractability; the switch is logged.

use crate::error::{Error, Result};
use crate::graph::SubGraph;

use super::mst::Edge;

/// Largest odd-vertex count handled by the exact subset-DP.
pub const MAX_EXACT: usize = 20;

/// Minimum-weight perfect matching over the induced subgraph.
///
/// Returns one edge per vertex pair, in parent-graph indices; every
/// subgraph vertex is covered exactly once and no edge is a self-loop.
/// Deterministic: the DP pairs the lowest unmatched vertex first and
/// scans partners in index order, the greedy path sorts candidate pairs
/// by (weight, indices).
///
/// # Errors
///
/// `InvariantViolation` when the vertex count is odd. The handshake
/// lemma makes the odd-degree set of any graph even, so this only fires
/// on an internal bug.
pub fn min_weight_matching(sub: &SubGraph) -> Result<Vec<Edge>> {
    let k = sub.len();
    if k == 0 {
        return Ok(Vec::new());
    }
    if k % 2 == 1 {
        return Err(Error::invariant(format!(
            "cannot perfectly match {k} vertices; count must be even"
        )));
    }

    let pairs = if k <= MAX_EXACT {
        exact_matching(sub)
    } else {
        log::debug!(
            "matching: {k} odd vertices exceeds exact limit {MAX_EXACT}, using greedy pairing"
        );
        greedy_matching(sub)
    };

    Ok(pairs
        .into_iter()
        .map(|(i, j)| Edge {
            a: sub.vertex(i),
            b: sub.vertex(j),
            weight: sub.weight(i, j),
        })
        .collect())
}

/// Exact matching by DP over vertex subsets.
///
/// `dp[mask]` is the cheapest way to pair up exactly the vertices in
/// `mask`. Transitions always pair the lowest unmatched vertex, so each
/// matching is enumerated once.
fn exact_matching(sub: &SubGraph) -> Vec<(usize, usize)> {
    let k = sub.len();
    let full = (1usize << k) - 1;
    let mut dp = vec![f64::INFINITY; 1 << k];
    let mut choice = vec![(0u8, 0u8); 1 << k];
    dp[0] = 0.0;

    for mask in 0..full {
        if !dp[mask].is_finite() {
            continue;
        }
        let i = (!mask).trailing_zeros() as usize;
        for j in (i + 1)..k {
            if mask & (1 << j) != 0 {
                continue;
            }
            let next = mask | (1 << i) | (1 << j);
            let cost = dp[mask] + sub.weight(i, j);
            if cost < dp[next] {
                dp[next] = cost;
                choice[next] = (i as u8, j as u8);
            }
        }
    }

    let mut pairs = Vec::with_capacity(k / 2);
    let mut mask = full;
    while mask != 0 {
        let (i, j) = choice[mask];
        pairs.push((i as usize, j as usize));
        mask &= !((1usize << i) | (1usize << j));
    }
    pairs.reverse();
    pairs
}

/// Greedy pairing: sort all pairs by weight, take each whose endpoints
/// are still free. Not optimal, but deterministic and O(k² log k).
fn greedy_matching(sub: &SubGraph) -> Vec<(usize, usize)> {
    let k = sub.len();
    let mut candidates = Vec::with_capacity(k * (k - 1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            candidates.push((i, j));
        }
    }
    candidates.sort_by(|&(a1, b1), &(a2, b2)| {
        sub.weight(a1, b1)
            .total_cmp(&sub.weight(a2, b2))
            .then(a1.cmp(&a2))
            .then(b1.cmp(&b2))
    });

    let mut matched = vec![false; k];
    let mut pairs = Vec::with_capacity(k / 2);
    for (i, j) in candidates {
        if !matched[i] && !matched[j] {
            matched[i] = true;
            matched[j] = true;
            pairs.push((i, j));
        }
    }
    pairs
}
