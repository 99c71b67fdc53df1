//! Simulated annealing over the tour permutation space.
//!
//! Single-solution trajectory search: swap two cities, accept
//! improvements always and regressions with the Metropolis probability
//! `exp(-delta / T)`, cool geometrically until the temperature floor.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealingConfig;
pub use runner::{AnnealingResult, AnnealingSolver};
