//! Cosine-similarity ranking of service vectors against 3x10D meters.
//!
//! Each service carries a precomputed vector over the ten life-situation
//! meters. A query is a subset of those meters with raw ratings; ranking
//! restricts every service vector to the queried meters, drops services
//! with no signal on them, and orders the rest by cosine similarity.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::SimilarityError;
pub use types::{LifeSituationMeter, QueryMeters, ScoredService, ServiceId, ServiceVector};

use tracing::debug;

/// Ranks `vectors` against the queried life-situation meters.
///
/// The returned list is sorted by descending cosine similarity. The sort is
/// stable, so services with equal similarity keep their catalog input order.
///
/// Returns [`SimilarityError::NoSignal`] when no service has a non-zero
/// vector over the queried meters. Callers treat that as "no results", not
/// as a failure.
pub fn rank(
    vectors: &[ServiceVector],
    meters: &QueryMeters,
) -> Result<Vec<ScoredService>, SimilarityError> {
    let query = meters.transform();
    if query.is_empty() {
        return Err(SimilarityError::NoSignal);
    }

    debug!(meters = query.len(), services = vectors.len(), "ranking service vectors");

    let query_values: Vec<f32> = query.iter().map(|(_, value)| *value).collect();
    let query_norm = norm(&query_values);

    let mut scored: Vec<ScoredService> = vectors
        .iter()
        .filter_map(|vector| {
            let restricted: Vec<f32> = query
                .iter()
                .map(|(meter, _)| vector.values[meter.index()])
                .collect();

            // A service with zeros on every queried meter has no signal to
            // rank on and must not appear in the output.
            if restricted.iter().all(|&v| v == 0.0) {
                return None;
            }

            let dot: f32 = restricted
                .iter()
                .zip(query_values.iter())
                .map(|(a, b)| a * b)
                .sum();
            let score = dot / (norm(&restricted) * query_norm);

            Some(ScoredService {
                service_id: vector.service_id.clone(),
                score,
            })
        })
        .collect();

    if scored.is_empty() {
        return Err(SimilarityError::NoSignal);
    }

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(scored)
}

fn norm(values: &[f32]) -> f32 {
    values.iter().map(|v| v * v).sum::<f32>().sqrt()
}
