//! Zero-mean Gaussian noise applied independently to every coordinate.
//!
//! One [`GaussianNoise`] is built per generation run, so the same standard
//! deviation applies to every coordinate of every point in that run.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::fmt;

// ---------------------------------------------------------------------------
// NoiseError
// ---------------------------------------------------------------------------

/// Validation errors for noise parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoiseError {
    /// Standard deviation was negative, NaN, or infinite.
    InvalidStdDev { value: f64 },
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidStdDev { value } => {
                write!(f, "stddev must be finite and >= 0, got {value}")
            }
        }
    }
}

impl std::error::Error for NoiseError {}

// ---------------------------------------------------------------------------
// GaussianNoise
// ---------------------------------------------------------------------------

/// Additive `N(0, std²)` noise.
///
/// With `std == 0` every draw is exactly `0.0` and no randomness is
/// consumed, so a noise-free run leaves the RNG stream to the parameter
/// draws alone.
#[derive(Clone, Copy, Debug)]
pub struct GaussianNoise {
    std: f64,
    dist: Option<Normal<f64>>,
}

impl GaussianNoise {
    /// Create a zero-mean Gaussian noise model.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidStdDev`] if `std` is negative, NaN, or
    /// infinite.
    pub fn new(std: f64) -> Result<Self, NoiseError> {
        if !std.is_finite() || std < 0.0 {
            return Err(NoiseError::InvalidStdDev { value: std });
        }
        let dist = if std == 0.0 {
            None
        } else {
            Some(Normal::new(0.0, std).map_err(|_| NoiseError::InvalidStdDev { value: std })?)
        };
        Ok(Self { std, dist })
    }

    /// Noise model that never perturbs.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            std: 0.0,
            dist: None,
        }
    }

    /// The configured standard deviation.
    #[must_use]
    pub const fn std(&self) -> f64 {
        self.std
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.dist.is_none()
    }

    /// Sample a single noise value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.dist {
            Some(dist) => dist.sample(rng),
            None => 0.0,
        }
    }

    /// Apply noise to a clean value: `value + sample()`.
    pub fn apply<R: Rng + ?Sized>(&self, value: f64, rng: &mut R) -> f64 {
        value + self.sample(rng)
    }

    /// Add an independent draw to each coordinate in place.
    pub fn apply_slice<R: Rng + ?Sized>(&self, values: &mut [f64], rng: &mut R) {
        if self.is_zero() {
            return;
        }
        for v in values.iter_mut() {
            *v = self.apply(*v, rng);
        }
    }
}

impl Default for GaussianNoise {
    fn default() -> Self {
        Self::none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
