//! Shared test fixtures and utilities for cloudgen crates.
//!
//! Provides deterministic RNG setup and small embeddings with known images
//! or known failure points.

pub mod fixtures;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use rng::seeded_rng;
