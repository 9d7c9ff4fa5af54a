// cloudgen-core: Points, bounds, embeddings, seeds, config and errors for cloudgen.

pub mod config;
pub mod error;
pub mod seed;
pub mod traits;
pub mod types;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{GenerationConfig, ManifoldSpec, Strategy};
    pub use crate::error::{BoundsError, ConfigError, ParamCountError};
    pub use crate::seed::SeedHierarchy;
    pub use crate::traits::{from_array_fn, from_fn, try_from_fn, Embedding};
    pub use crate::types::{Bounds, Interval, Point};
}
