use thiserror::Error;

/// Errors from constructing parameter intervals and bounds.
///
/// Copy for cheap propagation out of validation helpers.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BoundsError {
    #[error("invalid interval: low ({lo}) > high ({hi})")]
    Inverted { lo: f64, hi: f64 },

    #[error("interval bounds must be finite, got [{lo}, {hi}]")]
    NonFinite { lo: f64, hi: f64 },

    #[error("interval [{lo}, {hi}] is too wide to sample")]
    TooWide { lo: f64, hi: f64 },

    #[error("bounds must cover at least one parameter dimension")]
    Empty,
}

/// An embedding received a parameter vector of the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} parameters, got {got}")]
pub struct ParamCountError {
    pub expected: usize,
    pub got: usize,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid bounds: {0}")]
    Bounds(#[from] BoundsError),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
