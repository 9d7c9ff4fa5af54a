//! Built-in parametric manifolds for point-cloud generation.
//!
//! Each shape implements [`Embedding`](cloudgen_core::traits::Embedding) and
//! knows its natural parameter domain via `default_bounds()`. [`Manifold`]
//! wraps them for runtime selection from a
//! [`ManifoldSpec`](cloudgen_core::config::ManifoldSpec).
//!
//! | Shape          | Arity | Image                                   |
//! |----------------|-------|-----------------------------------------|
//! | [`Circle`]     | 1     | circle in the xy-plane                  |
//! | [`Sphere`]     | 2     | sphere centered at the origin           |
//! | [`Torus`]      | 2     | torus around the z-axis                 |
//! | [`TwoCircles`] | 2     | two disjoint circles in the xy-plane    |

pub mod shapes;

pub use shapes::{Circle, Manifold, ShapeError, Sphere, Torus, TwoCircles};

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::shapes::{Circle, Manifold, ShapeError, Sphere, Torus, TwoCircles};
}
