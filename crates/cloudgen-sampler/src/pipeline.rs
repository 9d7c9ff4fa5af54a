//! Shared per-point evaluation: embed, check dimensionality, add noise.

use cloudgen_core::traits::Embedding;
use cloudgen_core::types::{Bounds, Point};
use cloudgen_noise::model::GaussianNoise;
use rand::Rng;

use crate::error::SampleError;

/// Evaluates an embedding on parameter vectors and perturbs the result.
///
/// The first successful evaluation fixes the output dimensionality for the
/// rest of the run.
#[derive(Debug, Clone)]
pub(crate) struct Evaluator<E> {
    embedding: E,
    noise: GaussianNoise,
    dim: Option<usize>,
    emitted: usize,
}

impl<E: Embedding> Evaluator<E> {
    /// Validate arity against `bounds` and the noise level.
    pub(crate) fn new(
        embedding: E,
        bounds: &Bounds,
        stddev: f64,
    ) -> Result<Self, SampleError<E::Error>> {
        if embedding.arity() != bounds.len() {
            return Err(SampleError::ArityMismatch {
                expected: embedding.arity(),
                got: bounds.len(),
            });
        }
        let noise = GaussianNoise::new(stddev)?;
        Ok(Self {
            embedding,
            noise,
            dim: None,
            emitted: 0,
        })
    }

    pub(crate) fn embedding(&self) -> &E {
        &self.embedding
    }

    /// Embedding dimensionality, once the first point has been produced.
    pub(crate) const fn dim(&self) -> Option<usize> {
        self.dim
    }

    pub(crate) fn evaluate<R: Rng + ?Sized>(
        &mut self,
        params: &[f64],
        rng: &mut R,
    ) -> Result<Point, SampleError<E::Error>> {
        let clean = self
            .embedding
            .embed(params)
            .map_err(SampleError::Embedding)?;
        let got = clean.dim();
        match self.dim {
            None => self.dim = Some(got),
            Some(expected) if expected != got => {
                return Err(SampleError::DimensionMismatch {
                    index: self.emitted,
                    expected,
                    got,
                });
            }
            Some(_) => {}
        }
        let mut coords = clean.into_vec();
        self.noise.apply_slice(&mut coords, rng);
        self.emitted += 1;
        Ok(Point::new(coords))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
