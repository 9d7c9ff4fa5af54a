//! The [`Embedding`] trait and closure adapters.
//!
//! An embedding maps `arity` real parameters to a point in embedding space.
//! Arity is always declared up front: either explicitly ([`from_fn`],
//! [`try_from_fn`]) or through the array length of the closure's argument
//! ([`from_array_fn`]).

use std::convert::Infallible;
use std::fmt;

use crate::error::ParamCountError;
use crate::types::Point;

// ---------------------------------------------------------------------------
// Embedding
// ---------------------------------------------------------------------------

/// Parametric function `R^N -> R^M`.
///
/// Implementations must be pure: the same parameters always produce the same
/// point, and every call returns the same number of coordinates. Samplers
/// verify the latter and report a dimension mismatch when it is violated.
pub trait Embedding {
    /// Error raised by the embedding itself (e.g. a parameter outside its
    /// domain). Samplers hand it back to the caller unchanged.
    type Error: std::error::Error + 'static;

    /// Number of parameters `N`.
    fn arity(&self) -> usize;

    /// Evaluate the embedding. `params.len()` equals [`arity`](Self::arity)
    /// when called from a sampler.
    fn embed(&self, params: &[f64]) -> Result<Point, Self::Error>;

    /// Human-readable name for logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<T: Embedding + ?Sized> Embedding for &T {
    type Error = T::Error;

    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn embed(&self, params: &[f64]) -> Result<Point, Self::Error> {
        (**self).embed(params)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ---------------------------------------------------------------------------
// FnEmbedding
// ---------------------------------------------------------------------------

/// Infallible closure over a parameter slice. Built by [`from_fn`].
#[derive(Clone)]
pub struct FnEmbedding<F> {
    arity: usize,
    name: &'static str,
    f: F,
}

/// Wrap `f` as an embedding with `arity` parameters.
///
/// ```
/// use cloudgen_core::prelude::*;
///
/// let circle = from_fn(1, |p: &[f64]| [p[0].cos(), p[0].sin(), 0.0]);
/// assert_eq!(circle.arity(), 1);
/// assert_eq!(circle.embed(&[0.0]).unwrap().coords(), &[1.0, 0.0, 0.0]);
/// ```
pub const fn from_fn<F, P>(arity: usize, f: F) -> FnEmbedding<F>
where
    F: Fn(&[f64]) -> P,
    P: Into<Point>,
{
    FnEmbedding {
        arity,
        name: "fn",
        f,
    }
}

impl<F> FnEmbedding<F> {
    /// Builder: set the name reported in logs.
    #[must_use]
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<F> fmt::Debug for FnEmbedding<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEmbedding")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl<F, P> Embedding for FnEmbedding<F>
where
    F: Fn(&[f64]) -> P,
    P: Into<Point>,
{
    type Error = Infallible;

    fn arity(&self) -> usize {
        self.arity
    }

    fn embed(&self, params: &[f64]) -> Result<Point, Infallible> {
        Ok((self.f)(params).into())
    }

    fn name(&self) -> &str {
        self.name
    }
}

// ---------------------------------------------------------------------------
// TryFnEmbedding
// ---------------------------------------------------------------------------

/// Fallible closure over a parameter slice. Built by [`try_from_fn`].
#[derive(Clone)]
pub struct TryFnEmbedding<F> {
    arity: usize,
    name: &'static str,
    f: F,
}

/// Wrap a fallible `f` as an embedding with `arity` parameters.
///
/// Errors returned by `f` reach the sampler's caller unmodified.
pub const fn try_from_fn<F, P, E>(arity: usize, f: F) -> TryFnEmbedding<F>
where
    F: Fn(&[f64]) -> Result<P, E>,
    P: Into<Point>,
    E: std::error::Error + 'static,
{
    TryFnEmbedding {
        arity,
        name: "try_fn",
        f,
    }
}

impl<F> TryFnEmbedding<F> {
    /// Builder: set the name reported in logs.
    #[must_use]
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<F> fmt::Debug for TryFnEmbedding<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFnEmbedding")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl<F, P, E> Embedding for TryFnEmbedding<F>
where
    F: Fn(&[f64]) -> Result<P, E>,
    P: Into<Point>,
    E: std::error::Error + 'static,
{
    type Error = E;

    fn arity(&self) -> usize {
        self.arity
    }

    fn embed(&self, params: &[f64]) -> Result<Point, E> {
        (self.f)(params).map(Into::into)
    }

    fn name(&self) -> &str {
        self.name
    }
}

// ---------------------------------------------------------------------------
// ArrayEmbedding
// ---------------------------------------------------------------------------

/// Closure over a fixed-size parameter array. Built by [`from_array_fn`].
///
/// Arity is the const `N`, so it can never disagree with the closure.
#[derive(Clone)]
pub struct ArrayEmbedding<F, const N: usize> {
    name: &'static str,
    f: F,
}

/// Wrap `f: Fn([f64; N]) -> P` as an embedding of arity `N`.
///
/// ```
/// use cloudgen_core::prelude::*;
///
/// let plane = from_array_fn(|[x, y]: [f64; 2]| [x, y, 0.0]);
/// assert_eq!(plane.arity(), 2);
/// assert_eq!(plane.embed(&[1.0, 2.0]).unwrap().coords(), &[1.0, 2.0, 0.0]);
/// assert!(plane.embed(&[1.0]).is_err());
/// ```
pub const fn from_array_fn<F, P, const N: usize>(f: F) -> ArrayEmbedding<F, N>
where
    F: Fn([f64; N]) -> P,
    P: Into<Point>,
{
    ArrayEmbedding {
        name: "array_fn",
        f,
    }
}

impl<F, const N: usize> ArrayEmbedding<F, N> {
    /// Builder: set the name reported in logs.
    #[must_use]
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<F, const N: usize> fmt::Debug for ArrayEmbedding<F, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayEmbedding")
            .field("name", &self.name)
            .field("arity", &N)
            .finish_non_exhaustive()
    }
}

impl<F, P, const N: usize> Embedding for ArrayEmbedding<F, N>
where
    F: Fn([f64; N]) -> P,
    P: Into<Point>,
{
    type Error = ParamCountError;

    fn arity(&self) -> usize {
        N
    }

    fn embed(&self, params: &[f64]) -> Result<Point, ParamCountError> {
        let params: [f64; N] = params.try_into().map_err(|_| ParamCountError {
            expected: N,
            got: params.len(),
        })?;
        Ok((self.f)(params).into())
    }

    fn name(&self) -> &str {
        self.name
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
