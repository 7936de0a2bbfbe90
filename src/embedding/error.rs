use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The embedding model failed to produce a vector. This is a system
    /// fault and propagates to the caller; it is never recovered into an
    /// empty result.
    #[error("embedding model failed for query: {message}")]
    ModelFailed { message: String },

    /// The model produced a vector whose dimension does not match the
    /// precomputed store.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
