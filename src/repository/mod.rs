//! Capability interfaces for persistent storage and the service catalog.
//!
//! The ranking core never talks to Postgres or the catalog API directly; it
//! consumes these traits. Concrete bindings live in the surrounding
//! application, mock implementations back the tests.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod types;

pub use error::RepositoryError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCatalogFormatter, MockServiceRepository};
pub use types::{CatalogMetadata, ServiceChannel, ServiceDescriptions, ServiceFilters};

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::features::HistoryRow;
use crate::similarity::{ServiceId, ServiceVector};

/// Read access to service vectors, filtered id sets and recommendation
/// history.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Life-situation vectors of every service matching `filters`.
    async fn get_service_vectors(
        &self,
        filters: &ServiceFilters,
    ) -> Result<Vec<ServiceVector>, RepositoryError>;

    /// Ids of every service matching `filters`.
    async fn get_filtered_service_ids(
        &self,
        filters: &ServiceFilters,
    ) -> Result<HashSet<ServiceId>, RepositoryError>;

    /// Historical redirect and feedback rows for `service_ids`, restricted
    /// to recommendations made through `calling_service`.
    async fn get_history(
        &self,
        service_ids: &[ServiceId],
        calling_service: &str,
    ) -> Result<Vec<HistoryRow>, RepositoryError>;

    /// Service-class names keyed by service id. Services without a class
    /// may be absent from the map.
    async fn get_class_names(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<HashMap<ServiceId, String>, RepositoryError>;

    /// Untranslated descriptive texts keyed by service id.
    async fn get_descriptions(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<HashMap<ServiceId, ServiceDescriptions>, RepositoryError>;
}

/// Formats catalog metadata for a set of services, optionally translated.
/// The returned order is unspecified; the pipeline re-sorts by similarity.
#[async_trait]
pub trait CatalogFormatter: Send + Sync {
    async fn format(
        &self,
        service_ids: &[ServiceId],
        language: Option<&str>,
    ) -> Result<Vec<CatalogMetadata>, RepositoryError>;
}
