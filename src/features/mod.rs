//! Reranker feature assembly.
//!
//! Joins historical redirect/feedback counts, lexical scores and catalog
//! metadata into one fixed-schema [`FeatureVector`] per candidate. The join
//! against history is a left join keyed on service id: output length and
//! order always equal the candidate list, missing history becomes zeros.

pub mod types;


pub use types::{FeatureVector, HistoryRow};

use std::collections::{HashMap, HashSet};

use crate::similarity::{ScoredService, ServiceId};

/// Request-scoped context shared by every feature row.
#[derive(Debug, Clone, Copy)]
pub struct FeatureContext<'a> {
    /// Identity of the client service making the request.
    pub calling_service: &'a str,
    /// API path the request arrived on.
    pub request_path: &'a str,
}

/// Builds one feature vector per candidate, in candidate order.
///
/// `lexical_scores`, when present, must be aligned with `candidates`; the
/// structured recommendation path passes `None` and every row gets a 0.0
/// lexical score.
pub fn assemble(
    candidates: &[ScoredService],
    lexical_scores: Option<&[f32]>,
    class_names: &HashMap<ServiceId, String>,
    history: &[HistoryRow],
    context: FeatureContext<'_>,
) -> Vec<FeatureVector> {
    let redirects = redirect_counts(history);
    let positive = feedback_counts(history, 1);
    let negative = feedback_counts(history, -1);

    candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let id = &candidate.service_id;
            FeatureVector {
                lexical_score: lexical_scores.map_or(0.0, |scores| scores[i]),
                calling_service: context.calling_service.to_owned(),
                prev_neg_feedback: negative.get(id).copied().unwrap_or(0),
                prev_pos_feedback: positive.get(id).copied().unwrap_or(0),
                prev_redirects: redirects.get(id).copied().unwrap_or(0),
                request_path: context.request_path.to_owned(),
                service_class_name: class_names.get(id).cloned().unwrap_or_default(),
                similarity: candidate.score,
            }
        })
        .collect()
}

/// Counts distinct redirected `(recommendation, service)` pairs per service.
///
/// Only rows carrying a redirect timestamp count here; they are excluded
/// from the feedback sums below. Once a recommendation led to a redirect,
/// any feedback for that pair is attributed to redirect behaviour.
fn redirect_counts(history: &[HistoryRow]) -> HashMap<ServiceId, i32> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut counts: HashMap<ServiceId, i32> = HashMap::new();

    for row in history {
        if row.redirect_time.is_none() {
            continue;
        }
        if seen.insert((row.recommendation_id.as_str(), row.service_id.as_str())) {
            *counts.entry(row.service_id.clone()).or_insert(0) += 1;
        }
    }

    counts
}

/// Sums feedback with the given score per service, over rows without a
/// redirect timestamp. Duplicate rows per `(recommendation, service)` pair
/// keep the last one. Negative scores are sign-flipped so the result is a
/// non-negative count either way.
fn feedback_counts(history: &[HistoryRow], score: i8) -> HashMap<ServiceId, i32> {
    // Keep-last dedup: later rows overwrite earlier ones for the same pair.
    let mut latest: HashMap<(&str, &str), i8> = HashMap::new();
    for row in history {
        if row.redirect_time.is_some() {
            continue;
        }
        if let Some(feedback) = row.feedback_score {
            latest.insert(
                (row.recommendation_id.as_str(), row.service_id.as_str()),
                feedback,
            );
        }
    }

    let mut counts: HashMap<ServiceId, i32> = HashMap::new();
    for ((_, service_id), feedback) in latest {
        if feedback == score {
            *counts.entry(service_id.to_owned()).or_insert(0) += 1;
        }
    }

    counts
}
