//! Deterministic seed hierarchy for reproducible, independent generation runs.
//!
//! ```text
//! Root seed
//! └── Run seed (per generation run, e.g. one output file)
//! ```
//!
//! Samplers never own a global RNG. When several runs are generated
//! concurrently, each must draw from its own stream; deriving the streams
//! from one root keeps the whole batch reproducible.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive a child seed from a parent seed and a numeric index.
///
/// Uses `DefaultHasher` (SipHash-1-3) for fast, deterministic mixing.
///
/// ```
/// use cloudgen_core::seed::derive_seed_indexed;
///
/// let child = derive_seed_indexed(42, 0);
/// assert_ne!(child, 42);
/// assert_eq!(child, derive_seed_indexed(42, 0));
/// ```
#[must_use]
pub fn derive_seed_indexed(parent: u64, index: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    parent.hash(&mut hasher);
    index.hash(&mut hasher);
    hasher.finish()
}

/// Hierarchical seed manager for batches of generation runs.
///
/// ```
/// use cloudgen_core::seed::SeedHierarchy;
///
/// let seeds = SeedHierarchy::new(7);
/// assert_ne!(seeds.run_seed(0), seeds.run_seed(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedHierarchy {
    root: u64,
}

impl SeedHierarchy {
    #[must_use]
    pub const fn new(root: u64) -> Self {
        Self { root }
    }

    /// Hierarchy rooted at a seed drawn from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        use rand::RngCore;
        Self::new(rand::rngs::OsRng.next_u64())
    }

    /// The root seed.
    #[must_use]
    pub const fn root(&self) -> u64 {
        self.root
    }

    /// Seed for generation run `run`.
    #[must_use]
    pub fn run_seed(&self, run: u64) -> u64 {
        derive_seed_indexed(self.root, run)
    }

    /// `ChaCha8Rng` for run `run`.
    #[must_use]
    pub fn run_rng(&self, run: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.run_seed(run))
    }
}

impl Default for SeedHierarchy {
    fn default() -> Self {
        Self::new(0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
