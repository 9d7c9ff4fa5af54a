//! Run either sampler behind one iterator type, chosen at runtime.

use std::iter::FusedIterator;

use cloudgen_core::config::Strategy;
use cloudgen_core::traits::Embedding;
use cloudgen_core::types::{Bounds, Point};
use rand::Rng;

use crate::error::SampleError;
use crate::random::{generate_random, RandomPoints};
use crate::regular::{generate_regular, RegularPoints};

/// Build the sampler selected by `strategy`.
///
/// # Errors
///
/// Same as [`generate_random`] and [`generate_regular`].
pub fn generate<E, R>(
    strategy: Strategy,
    embedding: E,
    count: usize,
    bounds: &Bounds,
    stddev: f64,
    rng: R,
) -> Result<Points<E, R>, SampleError<E::Error>>
where
    E: Embedding,
    R: Rng,
{
    match strategy {
        Strategy::Random => {
            generate_random(embedding, count, bounds, stddev, rng).map(Points::Random)
        }
        Strategy::Regular => {
            generate_regular(embedding, count, bounds, stddev, rng).map(Points::Regular)
        }
    }
}

/// Points from either sampler.
#[derive(Debug)]
pub enum Points<E, R> {
    Random(RandomPoints<E, R>),
    Regular(RegularPoints<E, R>),
}

impl<E: Embedding, R> Points<E, R> {
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        match self {
            Self::Random(_) => Strategy::Random,
            Self::Regular(_) => Strategy::Regular,
        }
    }

    /// Number of points the sampler intends to produce if nothing fails.
    #[must_use]
    pub const fn planned_len(&self) -> usize {
        match self {
            Self::Random(points) => points.remaining(),
            Self::Regular(points) => points.planned_len(),
        }
    }
}

impl<E: Embedding, R: Rng> Iterator for Points<E, R> {
    type Item = Result<Point, SampleError<E::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Random(points) => points.next(),
            Self::Regular(points) => points.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Random(points) => points.size_hint(),
            Self::Regular(points) => points.size_hint(),
        }
    }
}

impl<E: Embedding, R: Rng> FusedIterator for Points<E, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudgen_test_utils::fixtures::plane_xy;
    use cloudgen_test_utils::seeded_rng;

    #[test]
    fn dispatches_on_strategy() {
        let bounds = Bounds::from_pairs(&[(0.0, 1.0), (0.0, 1.0)]).unwrap();
        let random = generate(Strategy::Random, plane_xy(), 10, &bounds, 0.0, seeded_rng(0))
            .unwrap();
        assert_eq!(random.strategy(), Strategy::Random);
        assert_eq!(random.planned_len(), 10);
        assert_eq!(random.count(), 10);

        let regular = generate(Strategy::Regular, plane_xy(), 10, &bounds, 0.0, seeded_rng(0))
            .unwrap();
        assert_eq!(regular.strategy(), Strategy::Regular);
        assert_eq!(regular.planned_len(), 9);
        assert_eq!(regular.count(), 9);
    }

    #[test]
    fn validation_errors_surface_for_both() {
        let bounds = Bounds::from_upper(&[1.0]).unwrap();
        for strategy in [Strategy::Random, Strategy::Regular] {
            let err = generate(strategy, plane_xy(), 10, &bounds, 0.0, seeded_rng(0))
                .unwrap_err();
            assert!(err.is_validation());
        }
    }
}
