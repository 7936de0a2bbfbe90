use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::repository::RepositoryError;
use crate::rerank::ScoringError;

/// Faults that escape the pipeline. Data conditions (no signal, empty
/// candidate sets) never appear here; they recover into empty results.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
