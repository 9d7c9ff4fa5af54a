//! Random sampler: independent uniform parameter draws.

use std::iter::FusedIterator;

use cloudgen_core::traits::Embedding;
use cloudgen_core::types::{Bounds, Point};
use rand::Rng;
use tracing::debug;

use crate::error::SampleError;
use crate::pipeline::Evaluator;

/// Sample `count` noisy points from `embedding`.
///
/// Each point draws every parameter independently and uniformly from its
/// interval in `bounds`, evaluates the embedding, and adds zero-mean
/// Gaussian noise with standard deviation `stddev` to every coordinate.
/// Parameters and noise are both drawn from `rng`.
///
/// Pass `&embedding` and `&mut rng` to keep ownership of either.
///
/// # Errors
///
/// Fails before drawing anything with [`SampleError::ArityMismatch`] if
/// `bounds.len() != embedding.arity()`, or [`SampleError::Noise`] if
/// `stddev` is negative or not finite. Later failures are yielded as `Err`
/// items by the iterator.
pub fn generate_random<E, R>(
    embedding: E,
    count: usize,
    bounds: &Bounds,
    stddev: f64,
    rng: R,
) -> Result<RandomPoints<E, R>, SampleError<E::Error>>
where
    E: Embedding,
    R: Rng,
{
    let eval = Evaluator::new(embedding, bounds, stddev)?;
    debug!(
        embedding = eval.embedding().name(),
        arity = bounds.len(),
        count,
        stddev,
        "random sampler ready"
    );
    Ok(RandomPoints {
        eval,
        bounds: bounds.clone(),
        rng,
        remaining: count,
    })
}

/// Lazy sequence of randomly sampled points. Built by [`generate_random`].
///
/// Yields exactly `count` items unless one is an `Err`, after which it ends.
/// Dropping it early is always safe.
#[derive(Debug)]
pub struct RandomPoints<E, R> {
    eval: Evaluator<E>,
    bounds: Bounds,
    rng: R,
    remaining: usize,
}

impl<E: Embedding, R> RandomPoints<E, R> {
    /// Points still to be drawn.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
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

impl<E: Embedding, R: Rng> Iterator for RandomPoints<E, R> {
    type Item = Result<Point, SampleError<E::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let params = self.bounds.sample(&mut self.rng);
        let result = self.eval.evaluate(&params, &mut self.rng);
        if result.is_err() {
            self.remaining = 0;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.min(1), Some(self.remaining))
    }
}

impl<E: Embedding, R: Rng> FusedIterator for RandomPoints<E, R> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
