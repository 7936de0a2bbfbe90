//! Recommendation and ranking engine for public services.
//!
//! Citizens either fill in the structured 3x10D life-situation
//! questionnaire or type free text; the engine turns that into a ranked
//! list of services from the national catalog.
//!
//! # Pipeline
//!
//! - [`similarity`] ranks precomputed service vectors against questionnaire
//!   meters with cosine similarity.
//! - [`embedding`] ranks catalog services against free text with dense
//!   sentence embeddings.
//! - [`lexical`] scores catalog descriptions with Okapi BM25, used as a
//!   reranker feature.
//! - [`features`] joins historical redirect/feedback counts and catalog
//!   metadata into fixed-schema reranker inputs.
//! - [`rerank`] fuses a learned model's predictions with upstream
//!   similarity via a geometric mean and assigns final ranks.
//! - [`pipeline`] orchestrates the above per request mode.
//!
//! # Collaborators
//!
//! Storage, the catalog API and the trained models are consumed through
//! the capability traits in [`repository`], [`embedding`] and [`rerank`].
//! Mock implementations for all of them are available behind
//! `#[cfg(any(test, feature = "mock"))]`.
//!
//! The engine is stateless and request-scoped; shared resources (embedding
//! store, models) are read-only after startup and safe for concurrent use.
//! Admission control for in-flight requests lives in [`limiter`].

pub mod config;
pub mod constants;
pub mod embedding;
pub mod features;
pub mod lexical;
pub mod limiter;
pub mod pipeline;
pub mod repository;
pub mod rerank;
pub mod similarity;

pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_RESULT_LIMIT, MIN_SIMILARITY, MOCK_SERVICE_MUNICIPALITY};
pub use embedding::{EmbeddingError, EmbeddingModel, EmbeddingStore};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbeddingModel;
pub use features::{FeatureContext, FeatureVector, HistoryRow};
pub use limiter::{CapacityError, TaskLimiter, TaskPermit};
pub use pipeline::{
    RankedRecommendation, RecommendError, RecommendParams, RecommendationPipeline,
    TextSearchParams, sanitize_search_text,
};
pub use repository::{
    CatalogFormatter, CatalogMetadata, RepositoryError, ServiceChannel, ServiceDescriptions,
    ServiceFilters, ServiceRepository,
};
#[cfg(any(test, feature = "mock"))]
pub use repository::{MockCatalogFormatter, MockServiceRepository};
#[cfg(any(test, feature = "mock"))]
pub use rerank::MockScoringModel;
pub use rerank::{RankedItem, ScoringError, ScoringModel};
pub use similarity::{
    LifeSituationMeter, QueryMeters, ScoredService, ServiceId, ServiceVector, SimilarityError,
};
