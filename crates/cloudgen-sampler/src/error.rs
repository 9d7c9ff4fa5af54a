use cloudgen_noise::model::NoiseError;
use thiserror::Error;

/// Errors from the grid enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimension must be >= 1")]
    ZeroDimension,

    #[error("grid of {resolution}^{dim} indices overflows usize")]
    TooLarge { dim: usize, resolution: usize },
}

/// Errors from point generation.
///
/// `E` is the embedding's own error type. Embedding failures are wrapped
/// transparently: `Display` and `source` are those of the original error,
/// and [`into_embedding_error`](Self::into_embedding_error) hands it back.
#[derive(Debug, Error)]
pub enum SampleError<E> {
    /// Bounds length differs from the embedding's arity. Raised before any
    /// point is drawn.
    #[error("arity mismatch: embedding takes {expected} parameters, bounds cover {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// The embedding returned a different number of coordinates than it did
    /// for the first point. `index` is the zero-based position of the
    /// offending point in the output sequence.
    #[error("dimension mismatch at point {index}: expected {expected} coordinates, got {got}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Noise(#[from] NoiseError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Embedding(E),
}

impl<E> SampleError<E> {
    /// The embedding's error, if this is one.
    pub fn into_embedding_error(self) -> Option<E> {
        match self {
            Self::Embedding(e) => Some(e),
            _ => None,
        }
    }

    /// Whether this error was raised by input validation rather than by
    /// producing a point.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ArityMismatch { .. } | Self::Noise(_) | Self::Grid(_)
        )
    }
}
