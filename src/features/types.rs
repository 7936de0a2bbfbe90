use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::similarity::ServiceId;

/// One historical recommendation/feedback row from the repository.
///
/// A row with a redirect timestamp records that the user followed the
/// recommendation; a row without one records satisfaction feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub recommendation_id: String,
    pub service_id: ServiceId,
    /// `+1` or `-1` when the user rated the recommendation.
    pub feedback_score: Option<i8>,
    /// Set when the user was redirected to the service.
    pub redirect_time: Option<DateTime<Utc>>,
}

impl HistoryRow {
    pub fn feedback(
        recommendation_id: impl Into<String>,
        service_id: impl Into<ServiceId>,
        score: i8,
    ) -> Self {
        Self {
            recommendation_id: recommendation_id.into(),
            service_id: service_id.into(),
            feedback_score: Some(score),
            redirect_time: None,
        }
    }

    pub fn redirect(
        recommendation_id: impl Into<String>,
        service_id: impl Into<ServiceId>,
        redirect_time: DateTime<Utc>,
    ) -> Self {
        Self {
            recommendation_id: recommendation_id.into(),
            service_id: service_id.into(),
            feedback_score: None,
            redirect_time: Some(redirect_time),
        }
    }
}

/// Fixed-schema reranker input, one per candidate.
///
/// The field set and types mirror what the scoring model was trained on;
/// changing either breaks the model contract.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    /// Raw BM25 score of the candidate against the query text. 0.0 on the
    /// structured recommendation path, which has no query text.
    pub lexical_score: f32,
    /// Categorical: identity of the calling client service.
    pub calling_service: String,
    /// Count of historical `-1` feedback rows (stored positive).
    pub prev_neg_feedback: i32,
    /// Count of historical `+1` feedback rows.
    pub prev_pos_feedback: i32,
    /// Count of distinct historical redirects.
    pub prev_redirects: i32,
    /// Categorical: API path of the request.
    pub request_path: String,
    /// Categorical: service class name from the catalog.
    pub service_class_name: String,
    /// Upstream similarity score (cosine or embedding distance).
    pub similarity: f32,
}
