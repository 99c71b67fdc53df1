//! Closed-tour (TSP) heuristics over geographic coordinates.
//!
//! Approximates shortest closed tours through a set of named cities,
//! measured by great-circle (Haversine) distance. Three solvers share
//! one immutable distance graph:
//!
//! - **Christofides**: deterministic construction — Prim spanning tree,
//!   minimum-weight perfect matching on odd-degree vertices, Eulerian
//!   circuit, shortcut. Within 1.5× of the optimum on metric inputs.
//! - **Simulated Annealing (SA)**: single-solution trajectory search
//!   with Metropolis acceptance and geometric cooling.
//! - **Genetic Algorithm (GA)**: population search with roulette-wheel
//!   selection, order crossover, and swap mutation.
//!
//! # Architecture
//!
//! [`graph::CityGraph`] is built once (O(n²) Haversine evaluations) and
//! shared read-only by every solver. Solvers expose a single `solve`
//! entry point with no side effects on construction; stochastic solvers
//! take a seed for reproducible runs. [`tour::evaluate`] is the one
//! closed-tour length used by all solvers and by external reporting.
//!
//! City ingestion is a collaborator, not a core concern: solvers consume
//! a prepared name→coordinate table, and [`provider`] parses the common
//! header + three-column delimited format when one is needed.

pub mod annealing;
pub mod christofides;
pub mod error;
pub mod genetic;
pub mod geo;
pub mod graph;
pub mod provider;
pub mod random;
pub mod tour;

pub use error::{Error, Result};
pub use geo::GeoPoint;
pub use graph::CityGraph;
pub use tour::Tour;
