//! Value types shared by every sampler: [`Point`], [`Interval`] and [`Bounds`].

use std::ops::Index;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BoundsError;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A sampled point in embedding space.
///
/// Immutable once built: there is no mutable access to the coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Point(Vec<f64>);

impl Point {
    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(coords: Vec<f64>) -> Self {
        Self(coords)
    }

    /// Coordinates as a slice.
    #[must_use]
    pub fn coords(&self) -> &[f64] {
        &self.0
    }

    /// Embedding dimensionality (number of coordinates).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Consume the point and return its coordinate vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self(coords)
    }
}

impl<const M: usize> From<[f64; M]> for Point {
    fn from(coords: [f64; M]) -> Self {
        Self(coords.to_vec())
    }
}

impl From<Point> for Vec<f64> {
    fn from(point: Point) -> Self {
        point.0
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Point {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Interval
// ---------------------------------------------------------------------------

/// Closed sampling interval `[lo, hi]` for one parameter dimension.
///
/// Serialized as a two-element array `[lo, hi]`; deserialization runs the
/// same validation as [`Interval::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// Widest accepted interval. Uniform draws scale the width up slightly,
    /// so it must stay well clear of `f64::MAX`.
    pub const MAX_WIDTH: f64 = f64::MAX / 2.0;

    /// Create an interval.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::NonFinite`] if either end is NaN or infinite,
    /// [`BoundsError::Inverted`] if `lo > hi`, or [`BoundsError::TooWide`]
    /// if `hi - lo` exceeds [`Interval::MAX_WIDTH`].
    pub fn new(lo: f64, hi: f64) -> Result<Self, BoundsError> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(BoundsError::NonFinite { lo, hi });
        }
        if lo > hi {
            return Err(BoundsError::Inverted { lo, hi });
        }
        if hi - lo > Self::MAX_WIDTH {
            return Err(BoundsError::TooWide { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Interval `[0, hi]`, the single-upper-limit form.
    ///
    /// # Errors
    ///
    /// Same as [`Interval::new`].
    pub fn upto(hi: f64) -> Result<Self, BoundsError> {
        Self::new(0.0, hi)
    }

    /// Interval `[-half_width, half_width]`.
    ///
    /// # Errors
    ///
    /// Same as [`Interval::new`]; a negative `half_width` is inverted.
    pub fn symmetric(half_width: f64) -> Result<Self, BoundsError> {
        Self::new(-half_width, half_width)
    }

    #[must_use]
    pub const fn lo(&self) -> f64 {
        self.lo
    }

    #[must_use]
    pub const fn hi(&self) -> f64 {
        self.hi
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Draw a value uniformly from `[lo, hi]`.
    ///
    /// A zero-width interval returns `lo` without consuming randomness.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.lo == self.hi {
            return self.lo;
        }
        rng.gen_range(self.lo..=self.hi)
    }

    /// Parameter value of grid step `index` when the interval is split into
    /// `resolution` equal cells: `lo + (hi - lo) * index / resolution`.
    ///
    /// The upper end is never reached for `index < resolution`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn grid_value(&self, index: usize, resolution: usize) -> f64 {
        let fraction = index as f64 / resolution as f64;
        self.lo + self.width() * fraction
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.lo..=self.hi).contains(&value)
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = BoundsError;

    fn try_from([lo, hi]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(lo, hi)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.lo, interval.hi]
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Per-dimension sampling intervals, one per embedding parameter.
///
/// Never empty. The number of intervals must equal the arity of the
/// embedding it is paired with; samplers check this before drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Interval>", into = "Vec<Interval>")]
pub struct Bounds(Vec<Interval>);

impl Bounds {
    /// Create bounds from a list of intervals.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Empty`] if `intervals` is empty.
    pub fn new(intervals: Vec<Interval>) -> Result<Self, BoundsError> {
        if intervals.is_empty() {
            return Err(BoundsError::Empty);
        }
        Ok(Self(intervals))
    }

    /// Create bounds from `(lo, hi)` pairs.
    ///
    /// # Errors
    ///
    /// Returns the first invalid interval's error, or [`BoundsError::Empty`].
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, BoundsError> {
        let intervals = pairs
            .iter()
            .map(|&(lo, hi)| Interval::new(lo, hi))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(intervals)
    }

    /// Create bounds from upper limits, each with an implicit lower limit of 0.
    ///
    /// # Errors
    ///
    /// Returns the first invalid interval's error, or [`BoundsError::Empty`].
    pub fn from_upper(limits: &[f64]) -> Result<Self, BoundsError> {
        let intervals = limits
            .iter()
            .map(|&hi| Interval::upto(hi))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(intervals)
    }

    /// `dims` copies of `[-half_width, half_width]`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Empty`] if `dims == 0`, or the interval error.
    pub fn symmetric(half_width: f64, dims: usize) -> Result<Self, BoundsError> {
        Self::new(vec![Interval::symmetric(half_width)?; dims])
    }

    /// Number of parameter dimensions covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.0.iter()
    }

    /// Draw one parameter vector, each dimension independently and uniformly.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.0.iter().map(|interval| interval.sample(rng)).collect()
    }

    /// Map an integer grid index to its parameter vector.
    ///
    /// `index` must have one entry per dimension.
    #[must_use]
    pub fn grid_point(&self, index: &[usize], resolution: usize) -> Vec<f64> {
        debug_assert_eq!(index.len(), self.0.len());
        self.0
            .iter()
            .zip(index)
            .map(|(interval, &i)| interval.grid_value(i, resolution))
            .collect()
    }

    /// Whether `params` has one value per dimension, each inside its interval.
    #[must_use]
    pub fn contains(&self, params: &[f64]) -> bool {
        params.len() == self.0.len()
            && self
                .0
                .iter()
                .zip(params)
                .all(|(interval, &v)| interval.contains(v))
    }
}

impl TryFrom<Vec<Interval>> for Bounds {
    type Error = BoundsError;

    fn try_from(intervals: Vec<Interval>) -> Result<Self, Self::Error> {
        Self::new(intervals)
    }
}

impl From<Bounds> for Vec<Interval> {
    fn from(bounds: Bounds) -> Self {
        bounds.0
    }
}

impl From<Interval> for Bounds {
    fn from(interval: Interval) -> Self {
        Self(vec![interval])
    }
}

impl<'a> IntoIterator for &'a Bounds {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
