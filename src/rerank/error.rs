use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// The external scoring model raised. Propagated to the caller as a
    /// system fault, never recovered into an empty result.
    #[error("scoring model failed: {message}")]
    ModelFailed { message: String },

    /// The model returned a score vector that is not aligned with its
    /// input. Programming-contract violation on the model side.
    #[error("scoring model returned {actual} predictions for {expected} feature rows")]
    PredictionLength { expected: usize, actual: usize },

    /// Caller passed feature rows that are not aligned with the candidate
    /// list. Programming-contract violation on the caller side.
    #[error("feature rows ({features}) are not aligned with candidates ({items})")]
    FeatureAlignment { items: usize, features: usize },
}
