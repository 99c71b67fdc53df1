//! Annealing parameters.

use crate::error::{Error, Result};

/// Configuration for the simulated-annealing solver.
///
/// The defaults are tuned for city sets of a few dozen points: a hot
/// start (T₀ = 1000), slow geometric cooling (α = 0.999), and a deep
/// floor (10⁻⁸), giving ⌈log(T_min/T₀)/log α⌉ ≈ 25 000 iterations.
///
/// # Examples
///
/// ```
/// use geotour::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_factor(0.995)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Starting temperature. Higher values accept more regressions
    /// early on.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied every iteration.
    pub cooling_factor: f64,

    /// Temperature floor. The loop stops once T drops to or below it.
    pub min_temperature: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_factor: 0.999,
            min_temperature: 1e-8,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks parameter ranges.
    ///
    /// # Errors
    /// `Config` describing the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.initial_temperature <= 0.0 {
            return Err(Error::config("initial_temperature must be positive"));
        }
        if self.min_temperature <= 0.0 {
            return Err(Error::config("min_temperature must be positive"));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(Error::config(
                "min_temperature must be less than initial_temperature",
            ));
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(Error::config(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        Ok(())
    }
}
