//! Request orchestration: structured 3x10D recommendations and free-text
//! search.
//!
//! The pipeline is stateless per request. Its collaborators (repository,
//! catalog formatter, embedding model and store, scoring model) are
//! constructed once at process start and shared read-only; nothing here is
//! mutated after construction.
//!
//! Absence of matching services is a valid outcome, not a failure: no-signal
//! and empty-candidate conditions recover into an empty result list.
//! Repository and model faults propagate to the caller.

pub mod error;
pub mod mock_service;
pub mod params;


pub use error::RecommendError;
pub use mock_service::mock_service_results;
pub use params::{RecommendParams, TextSearchParams, sanitize_search_text};

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::MOCK_SERVICE_MUNICIPALITY;
use crate::embedding::{self, EmbeddingModel, EmbeddingStore};
use crate::features::{self, FeatureContext};
use crate::lexical;
use crate::repository::{CatalogFormatter, CatalogMetadata, ServiceRepository};
use crate::rerank::{self, RankedItem, ScoringModel};
use crate::similarity::{self, ScoredService, ServiceId, SimilarityError};

/// One entry of the final recommendation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    /// 1-based position in the final order.
    pub rank: usize,
    pub similarity_score: f32,
    #[serde(flatten)]
    pub service: CatalogMetadata,
}

impl From<RankedItem<CatalogMetadata>> for RankedRecommendation {
    fn from(ranked: RankedItem<CatalogMetadata>) -> Self {
        Self {
            rank: ranked.rank,
            similarity_score: ranked.similarity_score,
            service: ranked.item,
        }
    }
}

/// The recommendation engine. Cheap to clone; all collaborators are shared.
#[derive(Clone)]
pub struct RecommendationPipeline {
    repository: Arc<dyn ServiceRepository>,
    formatter: Arc<dyn CatalogFormatter>,
    scoring_model: Arc<dyn ScoringModel>,
    embedding_model: Arc<dyn EmbeddingModel>,
    embedding_store: Arc<EmbeddingStore>,
}

impl RecommendationPipeline {
    pub fn new(
        repository: Arc<dyn ServiceRepository>,
        formatter: Arc<dyn CatalogFormatter>,
        scoring_model: Arc<dyn ScoringModel>,
        embedding_model: Arc<dyn EmbeddingModel>,
        embedding_store: Arc<EmbeddingStore>,
    ) -> Self {
        Self {
            repository,
            formatter,
            scoring_model,
            embedding_model,
            embedding_store,
        }
    }

    /// Recommends services for a structured 3x10D questionnaire.
    pub async fn recommend(
        &self,
        params: &RecommendParams,
        context: FeatureContext<'_>,
    ) -> Result<Vec<RankedRecommendation>, RecommendError> {
        debug!(
            limit = params.limit,
            meters = params.meters.len(),
            municipalities = params.filters.municipality_codes.len(),
            "recommending services from 3x10d meters"
        );

        // Designated mock municipality bypasses real computation; the fixed
        // result backs downstream session-transfer integration tests.
        if params.filters.municipality_codes == [MOCK_SERVICE_MUNICIPALITY] {
            debug!("serving mock service results");
            return Ok(mock_service_results());
        }

        let vectors = self.repository.get_service_vectors(&params.filters).await?;
        if vectors.is_empty() {
            warn!(
                municipalities = ?params.filters.municipality_codes,
                service_classes = ?params.filters.service_classes,
                "no service vectors matched the filters"
            );
            return Ok(Vec::new());
        }

        let scored = match similarity::rank(&vectors, &params.meters) {
            Ok(scored) => scored,
            Err(SimilarityError::NoSignal) => {
                debug!("no service vectors with signal on queried meters");
                return Ok(Vec::new());
            }
        };

        let top: Vec<ScoredService> = scored.into_iter().take(params.limit).collect();
        let enriched = self.enrich(&top, None).await?;

        if params.rerank {
            self.rerank_structured(enriched, context).await
        } else {
            Ok(rerank::assign_ranks(enriched)
                .into_iter()
                .map(Into::into)
                .collect())
        }
    }

    /// Searches services by free text over the dense-embedding store.
    pub async fn text_search(
        &self,
        params: &TextSearchParams,
        context: FeatureContext<'_>,
    ) -> Result<Vec<RankedRecommendation>, RecommendError> {
        debug!(
            limit = params.limit,
            language = ?params.language,
            "searching services by text"
        );

        let allowed = self
            .repository
            .get_filtered_service_ids(&params.filters)
            .await?;
        if allowed.is_empty() {
            return Ok(Vec::new());
        }

        let scored = embedding::search(
            &self.embedding_store,
            &allowed,
            self.embedding_model.as_ref(),
            params.search_text(),
            params.limit,
        )?;
        if scored.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            service_ids = ?scored.iter().map(|s| s.service_id.as_str()).collect::<Vec<_>>(),
            "text search candidates selected"
        );

        let enriched = self.enrich(&scored, params.language.as_deref()).await?;

        if params.rerank {
            self.rerank_text_search(enriched, params, context).await
        } else {
            Ok(rerank::assign_ranks(enriched)
                .into_iter()
                .map(Into::into)
                .collect())
        }
    }

    /// Fetches catalog metadata for `scored` and pairs each entry with its
    /// similarity score, preserving the similarity-descending input order.
    /// Services missing from the catalog are dropped.
    async fn enrich(
        &self,
        scored: &[ScoredService],
        language: Option<&str>,
    ) -> Result<Vec<(CatalogMetadata, f32)>, RecommendError> {
        let ids: Vec<ServiceId> = scored.iter().map(|s| s.service_id.clone()).collect();
        let formatted = self.formatter.format(&ids, language).await?;

        let mut by_id: HashMap<ServiceId, CatalogMetadata> = formatted
            .into_iter()
            .map(|metadata| (metadata.service_id.clone(), metadata))
            .collect();

        Ok(scored
            .iter()
            .filter_map(|s| by_id.remove(&s.service_id).map(|metadata| (metadata, s.score)))
            .collect())
    }

    async fn rerank_structured(
        &self,
        enriched: Vec<(CatalogMetadata, f32)>,
        context: FeatureContext<'_>,
    ) -> Result<Vec<RankedRecommendation>, RecommendError> {
        let candidates = as_scored(&enriched);
        let ids: Vec<ServiceId> = candidates.iter().map(|c| c.service_id.clone()).collect();

        let history = self
            .repository
            .get_history(&ids, context.calling_service)
            .await?;
        let class_names = self.repository.get_class_names(&ids).await?;

        // The structured path has no query text; lexical scores stay 0.
        let features = features::assemble(&candidates, None, &class_names, &history, context);

        let ranked = rerank::rerank(enriched, &features, self.scoring_model.as_ref())?;
        Ok(ranked.into_iter().map(Into::into).collect())
    }

    async fn rerank_text_search(
        &self,
        enriched: Vec<(CatalogMetadata, f32)>,
        params: &TextSearchParams,
        context: FeatureContext<'_>,
    ) -> Result<Vec<RankedRecommendation>, RecommendError> {
        let candidates = as_scored(&enriched);
        let ids: Vec<ServiceId> = candidates.iter().map(|c| c.service_id.clone()).collect();

        let descriptions = self.repository.get_descriptions(&ids).await?;
        let tokenized_query = lexical::tokenize(params.search_text());
        let tokenized_docs: Vec<Vec<String>> = ids
            .iter()
            .map(|id| {
                descriptions
                    .get(id)
                    .map(|d| lexical::tokenize(&d.joined()))
                    .unwrap_or_default()
            })
            .collect();
        let lexical_scores = lexical::bm25_scores(&tokenized_docs, &tokenized_query);

        let history = self
            .repository
            .get_history(&ids, context.calling_service)
            .await?;
        let class_names = self.repository.get_class_names(&ids).await?;

        let features = features::assemble(
            &candidates,
            Some(&lexical_scores),
            &class_names,
            &history,
            context,
        );

        let ranked = rerank::rerank(enriched, &features, self.scoring_model.as_ref())?;
        Ok(ranked.into_iter().map(Into::into).collect())
    }
}

fn as_scored(enriched: &[(CatalogMetadata, f32)]) -> Vec<ScoredService> {
    enriched
        .iter()
        .map(|(metadata, score)| ScoredService {
            service_id: metadata.service_id.clone(),
            score: *score,
        })
        .collect()
}
