//! Regular sampler: evenly spaced grid over the parameter domain.
//!
//! For `N` parameters and a target of `count` points the grid has
//! `r = floor(count^(1/N))` steps per dimension (see
//! [`grid_resolution`]), so `r^N` points are produced. That is never more
//! than `count` and usually less: a 3-parameter embedding asked for 100
//! points yields 64. Requesting fewer points than one per axis (`r == 0`)
//! yields an empty sequence rather than an error.
//!
//! Step `i` of dimension `d` maps to `lo_d + i * (hi_d - lo_d) / r`, so each
//! axis is sampled on the half-open interval `[lo_d, hi_d)`. Points come out
//! in lexicographic grid order, first parameter varying slowest; code that
//! groups points by a parameter slice relies on this.

use std::iter::FusedIterator;

use cloudgen_core::traits::Embedding;
use cloudgen_core::types::{Bounds, Point};
use rand::Rng;
use tracing::debug;

use crate::error::SampleError;
use crate::grid::{enumerate_grid, grid_resolution, GridIndices};
use crate::pipeline::Evaluator;

/// Sample the embedding on a regular grid of about `count` points.
///
/// Noise is drawn from `rng` exactly as in
/// [`generate_random`](crate::random::generate_random); grid positions are
/// deterministic, so with `stddev == 0` the output does not depend on `rng`.
///
/// # Errors
///
/// Fails before evaluating anything with [`SampleError::ArityMismatch`] or
/// [`SampleError::Noise`], as the random sampler does. Later failures are
/// yielded as `Err` items by the iterator.
pub fn generate_regular<E, R>(
    embedding: E,
    count: usize,
    bounds: &Bounds,
    stddev: f64,
    rng: R,
) -> Result<RegularPoints<E, R>, SampleError<E::Error>>
where
    E: Embedding,
    R: Rng,
{
    let eval = Evaluator::new(embedding, bounds, stddev)?;
    let resolution = grid_resolution(count, bounds.len());
    let grid = enumerate_grid(bounds.len(), resolution)?;
    debug!(
        embedding = eval.embedding().name(),
        arity = bounds.len(),
        requested = count,
        resolution,
        delivered = grid.len(),
        stddev,
        "regular sampler ready"
    );
    Ok(RegularPoints {
        eval,
        bounds: bounds.clone(),
        planned: grid.len(),
        grid,
        rng,
        failed: false,
    })
}

/// Lazy sequence of grid-sampled points. Built by [`generate_regular`].
#[derive(Debug)]
pub struct RegularPoints<E, R> {
    eval: Evaluator<E>,
    bounds: Bounds,
    grid: GridIndices,
    planned: usize,
    rng: R,
    failed: bool,
}

impl<E: Embedding, R> RegularPoints<E, R> {
    /// Grid steps per dimension.
    #[must_use]
    pub const fn resolution(&self) -> usize {
        self.grid.resolution()
    }

    /// Total points the grid will produce (`resolution^N`), fixed at
    /// construction.
    #[must_use]
    pub const fn planned_len(&self) -> usize {
        self.planned
    }

    /// Embedding dimensionality, known after the first point.
    #[must_use]
    pub const fn dim(&self) -> Option<usize> {
        self.eval.dim()
    }

    #[must_use]
    pub fn embedding(&self) -> &E {
        self.eval.embedding()
    }
}

impl<E: Embedding, R: Rng> Iterator for RegularPoints<E, R> {
    type Item = Result<Point, SampleError<E::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let index = self.grid.next()?;
        let params = self.bounds.grid_point(&index, self.grid.resolution());
        let result = self.eval.evaluate(&params, &mut self.rng);
        self.failed = result.is_err();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.grid.len();
        (remaining.min(1), Some(remaining))
    }
}

impl<E: Embedding, R: Rng> FusedIterator for RegularPoints<E, R> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
