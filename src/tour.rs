//! Tour representation and closed-tour evaluation.
//!
//! A [`Tour`] is an *open* permutation of the city indices with implicit
//! closure: the leg from the last city back to the first is part of the
//! tour's length but the start city is never repeated in the sequence.
//! This is the single normalized representation used everywhere — the
//! solvers produce it, the evaluator consumes it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::CityGraph;

/// An ordered visit sequence over city indices, implicitly closed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// Uniformly random permutation of `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self { order }
    }

    /// Resolves a name sequence against the graph.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown name; `Config` when the sequence is
    /// not a permutation of the full city set (repeats or omissions).
    pub fn from_names<S: AsRef<str>>(graph: &CityGraph, names: &[S]) -> Result<Self> {
        let mut order = Vec::with_capacity(names.len());
        for name in names {
            order.push(graph.index_of(name.as_ref())?);
        }
        let tour = Self { order };
        if !tour.is_permutation(graph.len()) {
            return Err(Error::config(
                "name sequence is not a permutation of the city set",
            ));
        }
        Ok(tour)
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Exchanges the cities at two positions.
    ///
    /// The permutation invariant survives any swap, which is why it is
    /// the one in-place mutation the search solvers use.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.order.swap(i, j);
    }

    /// True iff the tour visits each of `0..n` exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &v in &self.order {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }

    /// The visit sequence as city names, for reporting.
    pub fn city_names<'g>(&self, graph: &'g CityGraph) -> Vec<&'g str> {
        self.order.iter().map(|&v| graph.name(v)).collect()
    }
}

/// Total closed-tour distance: every consecutive leg plus the wrapping
/// leg from the last city back to the first.
///
/// Invariant under cyclic rotation and under reversal of the tour.
///
/// # Errors
/// `NotFound` when the tour references a vertex outside the graph.
pub fn evaluate(graph: &CityGraph, tour: &Tour) -> Result<f64> {
    let order = tour.order();
    if let Some(&bad) = order.iter().find(|&&v| v >= graph.len()) {
        return Err(Error::not_found(format!(
            "tour vertex {bad} outside graph of {} cities",
            graph.len()
        )));
    }
    let n = order.len();
    if n < 2 {
        return Ok(0.0);
    }
    let total = (0..n)
        .map(|i| graph.weight(order[i], order[(i + 1) % n]))
        .sum();
    Ok(total)
}
