//! Embeddings with known behavior for sampler tests.

use std::convert::Infallible;
use std::fmt::Debug;

use cloudgen_core::error::ParamCountError;
use cloudgen_core::traits::{from_array_fn, from_fn, try_from_fn, Embedding};
use thiserror::Error;

/// `(x, y) -> (x, y, 0)`.
pub fn plane_xy() -> impl Embedding<Error = ParamCountError> + Clone + Debug {
    from_array_fn(|[x, y]: [f64; 2]| [x, y, 0.0]).named("plane_xy")
}

/// `t -> (cos t, sin t, 0)`.
pub fn unit_circle() -> impl Embedding<Error = ParamCountError> + Clone + Debug {
    from_array_fn(|[t]: [f64; 1]| [t.cos(), t.sin(), 0.0]).named("unit_circle")
}

/// One-parameter embedding that breaks the constant-dimension contract:
/// three coordinates below `threshold`, two at or above it.
pub fn ragged_above(threshold: f64) -> impl Embedding<Error = Infallible> + Clone + Debug {
    from_fn(1, move |p: &[f64]| {
        if p[0] < threshold {
            vec![p[0], 0.0, 0.0]
        } else {
            vec![p[0], 0.0]
        }
    })
    .named("ragged")
}

/// Raised by [`domain_limited`] for parameters past its limit.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("parameter {value} exceeds domain limit {limit}")]
pub struct DomainError {
    pub value: f64,
    pub limit: f64,
}

/// `t -> (t, 0)` for `t <= limit`; fails with [`DomainError`] otherwise.
pub fn domain_limited(limit: f64) -> impl Embedding<Error = DomainError> + Clone + Debug {
    try_from_fn(1, move |p: &[f64]| {
        if p[0] > limit {
            Err(DomainError { value: p[0], limit })
        } else {
            Ok([p[0], 0.0])
        }
    })
    .named("domain_limited")
}
