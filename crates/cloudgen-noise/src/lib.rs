//! Coordinate noise for sampled point clouds.
//!
//! `cloudgen-noise` perturbs clean embedding-space coordinates with
//! independent zero-mean Gaussian noise. All sampling takes an explicit RNG
//! parameter, so a seeded generator reproduces a run exactly.
//!
//! # Quick Start
//!
//! ```
//! use cloudgen_noise::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let noise = GaussianNoise::new(0.02).unwrap();
//! let mut coords = [1.0, 0.0, 0.0];
//! noise.apply_slice(&mut coords, &mut rng);
//! ```

pub mod model;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::model::{GaussianNoise, NoiseError};
}
