//! Point-cloud samplers over parametric embeddings.
//!
//! Two strategies share one contract: take an [`Embedding`], a set of
//! per-parameter [`Bounds`] and a noise standard deviation, and return a lazy
//! iterator of noisy [`Point`]s.
//!
//! - [`generate_random`](random::generate_random) draws each parameter
//!   uniformly from its interval and yields exactly `count` points.
//! - [`generate_regular`](regular::generate_regular) walks an evenly spaced
//!   half-open grid of `floor(count^(1/N))` steps per dimension and yields
//!   `floor(count^(1/N))^N` points, which is usually **fewer** than `count`.
//!
//! Both validate their inputs before the first point is drawn and report
//! per-point failures (dimension mismatch, embedding errors) as `Err` items,
//! after which the iterator ends. Randomness comes from the caller's RNG;
//! nothing is drawn from a global source.
//!
//! # Example
//!
//! ```
//! use cloudgen_core::prelude::*;
//! use cloudgen_sampler::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let circle = from_array_fn(|[t]: [f64; 1]| [t.cos(), t.sin(), 0.0]);
//! let bounds = Bounds::from_upper(&[std::f64::consts::TAU]).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let points: Vec<Point> = generate_regular(&circle, 4, &bounds, 0.0, &mut rng)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(points.len(), 4);
//! ```

pub mod error;
pub mod grid;
mod pipeline;
pub mod random;
pub mod regular;
pub mod strategy;

pub use cloudgen_core::traits::Embedding;
pub use cloudgen_core::types::{Bounds, Point};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::error::{GridError, SampleError};
    pub use crate::grid::{enumerate_grid, grid_resolution, GridIndices};
    pub use crate::random::{generate_random, RandomPoints};
    pub use crate::regular::{generate_regular, RegularPoints};
    pub use crate::strategy::{generate, Points};
    pub use cloudgen_core::config::Strategy;
}
