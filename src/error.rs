use thiserror::Error as ThisError;

/// Failure modes surfaced by graph construction and the solvers.
///
/// Errors surface immediately from `solve()`/`evaluate()`; nothing is
/// retried internally and no partial result is returned.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Unusable input or parameters: fewer than two cities, duplicate
    /// names, out-of-range coordinates, invalid solver settings.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Lookup of a city or city pair that is not in the graph.
    #[error("not found: {0}")]
    NotFound(String),
    /// An internal structural guarantee was broken (odd number of
    /// odd-degree vertices, under-spanning tree). Indicates a bug.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    /// Input that is formally valid but breaks a solver's math, e.g.
    /// coincident coordinates producing a zero-length tour.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput(message.into())
    }
}
