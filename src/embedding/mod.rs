//! Dense-embedding nearest-neighbor search over the service catalog.
//!
//! The embedding model and the precomputed store are loaded once at process
//! start and shared read-only across requests. Search itself is synchronous
//! CPU-bound vector math.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbeddingModel;

use std::collections::HashSet;

use tracing::debug;

use crate::similarity::{ScoredService, ServiceId};

/// Sentence-embedding capability. Implementations wrap the actual model;
/// they must be safe to call concurrently from multiple workers.
pub trait EmbeddingModel: Send + Sync {
    /// Embeds `text` into the store's vector space.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Precomputed `(service id, embedding)` pairs.
///
/// Ids and vectors travel together in one sequence so filtering can never
/// misalign a service with another service's embedding.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingStore {
    entries: Vec<(ServiceId, Vec<f32>)>,
}

impl EmbeddingStore {
    pub fn new(entries: Vec<(ServiceId, Vec<f32>)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose service id is in `allowed`, in store order.
    fn restrict<'a>(&'a self, allowed: &HashSet<ServiceId>) -> Vec<(&'a ServiceId, &'a [f32])> {
        self.entries
            .iter()
            .filter(|(id, _)| allowed.contains(id))
            .map(|(id, vector)| (id, vector.as_slice()))
            .collect()
    }
}

/// Finds the services closest to `query_text` in embedding space.
///
/// Candidates are restricted to `allowed` ids before any similarity is
/// computed. An empty candidate set yields an empty result, not an error.
/// Returns at most `limit` services, best first; equal similarities keep
/// store order.
pub fn search(
    store: &EmbeddingStore,
    allowed: &HashSet<ServiceId>,
    model: &dyn EmbeddingModel,
    query_text: &str,
    limit: usize,
) -> Result<Vec<ScoredService>, EmbeddingError> {
    let candidates = store.restrict(allowed);
    if candidates.is_empty() {
        debug!("no embedding candidates after filtering");
        return Ok(Vec::new());
    }

    let query = model.embed(query_text)?;

    // A query vector outside the store's space is a broken model, not a
    // no-match condition.
    if let Some((_, vector)) = candidates.first() {
        if query.len() != vector.len() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: vector.len(),
                actual: query.len(),
            });
        }
    }

    let mut scored: Vec<ScoredService> = candidates
        .into_iter()
        .map(|(id, vector)| ScoredService {
            service_id: id.clone(),
            score: cosine_similarity(&query, vector),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(limit);

    debug!(returned = scored.len(), "embedding search selected candidates");

    Ok(scored)
}

/// Cosine similarity of two f32 vectors. Mismatched or zero-norm inputs
/// score 0 instead of producing NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
