//! Second-stage reordering with a learned scoring model.
//!
//! The model's prediction is fused with the upstream similarity score via a
//! geometric mean; both inputs are floored first because the geometric mean
//! is undefined for non-positive values. Final ranks are 1-based and
//! contiguous whether or not reranking ran.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::ScoringError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockScoringModel;

use tracing::debug;

use crate::constants::MIN_SIMILARITY;
use crate::features::FeatureVector;

/// Learned reranking model capability. The model is trained offline and
/// supplied at process start; a failing model is a system fault that
/// propagates to the caller.
pub trait ScoringModel: Send + Sync {
    /// Scores each feature vector; the output must be aligned with the
    /// input, one score per row.
    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<f32>, ScoringError>;
}

/// An item with its final position in the recommendation output.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem<T> {
    /// 1-based, contiguous, assigned after the final ordering.
    pub rank: usize,
    /// Upstream similarity score, floored at [`MIN_SIMILARITY`].
    pub similarity_score: f32,
    pub item: T,
}

/// Floors a score at [`MIN_SIMILARITY`].
///
/// All floor/clamp logic lives here; both fusion inputs pass through this
/// exact function before combination.
pub fn clamp_score(score: f32) -> f32 {
    score.max(MIN_SIMILARITY)
}

/// Geometric mean of the clamped similarity and model scores.
pub fn combine_scores(similarity: f32, predicted: f32) -> f32 {
    (clamp_score(similarity) * clamp_score(predicted)).sqrt()
}

/// Reorders `items` by the fused model/similarity score and assigns ranks.
///
/// `features` must be aligned with `items`. The sort is stable: equal fused
/// scores keep the incoming order. Feature data is consumed here and does
/// not appear in the output.
pub fn rerank<T>(
    items: Vec<(T, f32)>,
    features: &[FeatureVector],
    model: &dyn ScoringModel,
) -> Result<Vec<RankedItem<T>>, ScoringError> {
    if items.len() != features.len() {
        return Err(ScoringError::FeatureAlignment {
            items: items.len(),
            features: features.len(),
        });
    }

    let predictions = model.predict(features)?;
    if predictions.len() != items.len() {
        return Err(ScoringError::PredictionLength {
            expected: items.len(),
            actual: predictions.len(),
        });
    }

    let mut fused: Vec<(T, f32, f32)> = items
        .into_iter()
        .zip(predictions)
        .map(|((item, similarity), predicted)| {
            (item, similarity, combine_scores(similarity, predicted))
        })
        .collect();

    fused.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    debug!(items = fused.len(), "reranked candidates by fused score");

    Ok(fused
        .into_iter()
        .enumerate()
        .map(|(i, (item, similarity, _))| RankedItem {
            rank: i + 1,
            similarity_score: clamp_score(similarity),
            item,
        })
        .collect())
}

/// Assigns ranks from the existing order, for requests without reranking.
pub fn assign_ranks<T>(items: Vec<(T, f32)>) -> Vec<RankedItem<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, (item, similarity))| RankedItem {
            rank: i + 1,
            similarity_score: clamp_score(similarity),
            item,
        })
        .collect()
}
