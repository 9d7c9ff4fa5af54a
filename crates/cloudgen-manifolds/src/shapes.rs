use std::f64::consts::{PI, TAU};

use cloudgen_core::config::ManifoldSpec;
use cloudgen_core::error::ParamCountError;
use cloudgen_core::traits::Embedding;
use cloudgen_core::types::{Bounds, Interval, Point};
use thiserror::Error;

// ---------------------------------------------------------------------------
// ShapeError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    #[error("{name} must be finite and > 0, got {value}")]
    InvalidRadius { name: &'static str, value: f64 },

    #[error("offset must be finite, got {0}")]
    InvalidOffset(f64),
}

fn check_radius(name: &'static str, value: f64) -> Result<f64, ShapeError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ShapeError::InvalidRadius { name, value });
    }
    Ok(value)
}

fn check_params(expected: usize, params: &[f64]) -> Result<(), ParamCountError> {
    if params.len() != expected {
        return Err(ParamCountError {
            expected,
            got: params.len(),
        });
    }
    Ok(())
}

/// Full-turn interval `[0, 2π]`.
fn turn() -> Interval {
    Interval::upto(TAU).unwrap_or_else(|_| unreachable!("2π is finite and positive"))
}

// ---------------------------------------------------------------------------
// Circle
// ---------------------------------------------------------------------------

/// `t -> (r cos t, r sin t, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidRadius`] unless `radius` is finite and positive.
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: check_radius("radius", radius)?,
        })
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// One full turn.
    #[must_use]
    pub fn default_bounds() -> Bounds {
        Bounds::from(turn())
    }
}

impl Embedding for Circle {
    type Error = ParamCountError;

    fn arity(&self) -> usize {
        1
    }

    fn embed(&self, params: &[f64]) -> Result<Point, ParamCountError> {
        check_params(1, params)?;
        let t = params[0];
        Ok(Point::from([
            self.radius * t.cos(),
            self.radius * t.sin(),
            0.0,
        ]))
    }

    fn name(&self) -> &str {
        "circle"
    }
}

// ---------------------------------------------------------------------------
// Sphere
// ---------------------------------------------------------------------------

/// Polar angle `θ` and azimuth `φ` to
/// `(r sin θ cos φ, r sin θ sin φ, r cos θ)`.
///
/// A uniform draw over `(θ, φ)` clusters points near the poles; this is the
/// plain parametrization, not an area-uniform one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidRadius`] unless `radius` is finite and positive.
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: check_radius("radius", radius)?,
        })
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// `θ ∈ [0, π]`, `φ ∈ [0, 2π]`.
    #[must_use]
    pub fn default_bounds() -> Bounds {
        let polar = Interval::upto(PI).unwrap_or_else(|_| unreachable!("π is positive"));
        Bounds::new(vec![polar, turn()]).unwrap_or_else(|_| unreachable!("two intervals"))
    }
}

impl Embedding for Sphere {
    type Error = ParamCountError;

    fn arity(&self) -> usize {
        2
    }

    fn embed(&self, params: &[f64]) -> Result<Point, ParamCountError> {
        check_params(2, params)?;
        let (theta, phi) = (params[0], params[1]);
        let r = self.radius;
        Ok(Point::from([
            r * theta.sin() * phi.cos(),
            r * theta.sin() * phi.sin(),
            r * theta.cos(),
        ]))
    }

    fn name(&self) -> &str {
        "sphere"
    }
}

// ---------------------------------------------------------------------------
// Torus
// ---------------------------------------------------------------------------

/// Ring torus around the z-axis:
/// `(u, v) -> ((R + r cos v) cos u, (R + r cos v) sin u, r sin v)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    major_radius: f64,
    minor_radius: f64,
}

impl Torus {
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidRadius`] unless both radii are finite
    /// and positive.
    pub fn new(major_radius: f64, minor_radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            major_radius: check_radius("major_radius", major_radius)?,
            minor_radius: check_radius("minor_radius", minor_radius)?,
        })
    }

    #[must_use]
    pub const fn major_radius(&self) -> f64 {
        self.major_radius
    }

    #[must_use]
    pub const fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    /// Both angles over a full turn.
    #[must_use]
    pub fn default_bounds() -> Bounds {
        Bounds::new(vec![turn(), turn()]).unwrap_or_else(|_| unreachable!("two intervals"))
    }
}

impl Embedding for Torus {
    type Error = ParamCountError;

    fn arity(&self) -> usize {
        2
    }

    fn embed(&self, params: &[f64]) -> Result<Point, ParamCountError> {
        check_params(2, params)?;
        let (u, v) = (params[0], params[1]);
        let ring = self.major_radius + self.minor_radius * v.cos();
        Ok(Point::from([
            ring * u.cos(),
            ring * u.sin(),
            self.minor_radius * v.sin(),
        ]))
    }

    fn name(&self) -> &str {
        "torus"
    }
}

// ---------------------------------------------------------------------------
// TwoCircles
// ---------------------------------------------------------------------------

/// Two circles of the same radius in the xy-plane, one at the origin and one
/// shifted by `offset` along x. The second parameter `s` picks the circle:
/// `s < 0.5` draws from the first, otherwise the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoCircles {
    radius: f64,
    offset: f64,
}

impl TwoCircles {
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidRadius`] for a bad radius and
    /// [`ShapeError::InvalidOffset`] for a non-finite offset.
    pub fn new(radius: f64, offset: f64) -> Result<Self, ShapeError> {
        if !offset.is_finite() {
            return Err(ShapeError::InvalidOffset(offset));
        }
        Ok(Self {
            radius: check_radius("radius", radius)?,
            offset,
        })
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// `t ∈ [0, 2π]`, selector `s ∈ [0, 1]`.
    #[must_use]
    pub fn default_bounds() -> Bounds {
        let selector = Interval::upto(1.0).unwrap_or_else(|_| unreachable!("1 is positive"));
        Bounds::new(vec![turn(), selector]).unwrap_or_else(|_| unreachable!("two intervals"))
    }
}

impl Embedding for TwoCircles {
    type Error = ParamCountError;

    fn arity(&self) -> usize {
        2
    }

    fn embed(&self, params: &[f64]) -> Result<Point, ParamCountError> {
        check_params(2, params)?;
        let (t, s) = (params[0], params[1]);
        let shift = if s < 0.5 { 0.0 } else { self.offset };
        Ok(Point::from([
            shift + self.radius * t.cos(),
            self.radius * t.sin(),
            0.0,
        ]))
    }

    fn name(&self) -> &str {
        "two_circles"
    }
}

// ---------------------------------------------------------------------------
// Manifold
// ---------------------------------------------------------------------------

/// Any built-in shape, selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Manifold {
    Circle(Circle),
    Sphere(Sphere),
    Torus(Torus),
    TwoCircles(TwoCircles),
}

impl Manifold {
    /// Build the shape a config entry describes.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] for invalid shape parameters.
    pub fn from_spec(spec: &ManifoldSpec) -> Result<Self, ShapeError> {
        Ok(match *spec {
            ManifoldSpec::Circle { radius } => Self::Circle(Circle::new(radius)?),
            ManifoldSpec::Sphere { radius } => Self::Sphere(Sphere::new(radius)?),
            ManifoldSpec::Torus {
                major_radius,
                minor_radius,
            } => Self::Torus(Torus::new(major_radius, minor_radius)?),
            ManifoldSpec::TwoCircles { radius, offset } => {
                Self::TwoCircles(TwoCircles::new(radius, offset)?)
            }
        })
    }

    /// The shape's natural parameter domain.
    #[must_use]
    pub fn default_bounds(&self) -> Bounds {
        match self {
            Self::Circle(_) => Circle::default_bounds(),
            Self::Sphere(_) => Sphere::default_bounds(),
            Self::Torus(_) => Torus::default_bounds(),
            Self::TwoCircles(_) => TwoCircles::default_bounds(),
        }
    }

    fn inner(&self) -> &dyn Embedding<Error = ParamCountError> {
        match self {
            Self::Circle(shape) => shape,
            Self::Sphere(shape) => shape,
            Self::Torus(shape) => shape,
            Self::TwoCircles(shape) => shape,
        }
    }
}

impl Embedding for Manifold {
    type Error = ParamCountError;

    fn arity(&self) -> usize {
        self.inner().arity()
    }

    fn embed(&self, params: &[f64]) -> Result<Point, ParamCountError> {
        self.inner().embed(params)
    }

    fn name(&self) -> &str {
        self.inner().name()
    }
}

impl TryFrom<&ManifoldSpec> for Manifold {
    type Error = ShapeError;

    fn try_from(spec: &ManifoldSpec) -> Result<Self, Self::Error> {
        Self::from_spec(spec)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
