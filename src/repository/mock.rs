use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::features::HistoryRow;
use crate::similarity::{ServiceId, ServiceVector};

use super::error::RepositoryError;
use super::types::{CatalogMetadata, ServiceDescriptions, ServiceFilters};
use super::{CatalogFormatter, ServiceRepository};

/// In-memory repository for tests. Filters are matched on municipality
/// codes only; the full SQL filter semantics stay in the real binding.
#[derive(Debug, Default)]
pub struct MockServiceRepository {
    vectors: Vec<ServiceVector>,
    history: Vec<HistoryRow>,
    class_names: HashMap<ServiceId, String>,
    descriptions: HashMap<ServiceId, ServiceDescriptions>,
    fail: bool,
}

impl MockServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vectors(mut self, vectors: Vec<ServiceVector>) -> Self {
        self.vectors = vectors;
        self
    }

    pub fn with_history(mut self, history: Vec<HistoryRow>) -> Self {
        self.history = history;
        self
    }

    pub fn with_class_name(mut self, id: impl Into<ServiceId>, name: impl Into<String>) -> Self {
        self.class_names.insert(id.into(), name.into());
        self
    }

    pub fn with_description(
        mut self,
        id: impl Into<ServiceId>,
        descriptions: ServiceDescriptions,
    ) -> Self {
        self.descriptions.insert(id.into(), descriptions);
        self
    }

    /// Makes every query fail, for fault-propagation tests.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.fail {
            return Err(RepositoryError::QueryFailed {
                message: "mock repository configured to fail".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ServiceRepository for MockServiceRepository {
    async fn get_service_vectors(
        &self,
        _filters: &ServiceFilters,
    ) -> Result<Vec<ServiceVector>, RepositoryError> {
        self.check()?;
        Ok(self.vectors.clone())
    }

    async fn get_filtered_service_ids(
        &self,
        _filters: &ServiceFilters,
    ) -> Result<HashSet<ServiceId>, RepositoryError> {
        self.check()?;
        Ok(self.vectors.iter().map(|v| v.service_id.clone()).collect())
    }

    async fn get_history(
        &self,
        service_ids: &[ServiceId],
        _calling_service: &str,
    ) -> Result<Vec<HistoryRow>, RepositoryError> {
        self.check()?;
        Ok(self
            .history
            .iter()
            .filter(|row| service_ids.contains(&row.service_id))
            .cloned()
            .collect())
    }

    async fn get_class_names(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<HashMap<ServiceId, String>, RepositoryError> {
        self.check()?;
        Ok(self
            .class_names
            .iter()
            .filter(|(id, _)| service_ids.contains(id))
            .map(|(id, name)| (id.clone(), name.clone()))
            .collect())
    }

    async fn get_descriptions(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<HashMap<ServiceId, ServiceDescriptions>, RepositoryError> {
        self.check()?;
        Ok(self
            .descriptions
            .iter()
            .filter(|(id, _)| service_ids.contains(id))
            .map(|(id, desc)| (id.clone(), desc.clone()))
            .collect())
    }
}

/// In-memory catalog formatter for tests.
///
/// Returns entries sorted by service id, deliberately NOT in request order,
/// so pipeline tests exercise the similarity re-sort.
#[derive(Debug, Default)]
pub struct MockCatalogFormatter {
    entries: HashMap<ServiceId, CatalogMetadata>,
    fail: bool,
}

impl MockCatalogFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every format call fail, for fault-propagation tests.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_service(mut self, metadata: CatalogMetadata) -> Self {
        self.entries.insert(metadata.service_id.clone(), metadata);
        self
    }

    /// Registers a minimal entry with just an id and a name.
    pub fn with_named_service(
        self,
        id: impl Into<ServiceId>,
        name: impl Into<String>,
    ) -> Self {
        let id = id.into();
        self.with_service(CatalogMetadata {
            service_id: id.clone(),
            service_name: name.into(),
            ..CatalogMetadata::default()
        })
    }
}

#[async_trait]
impl CatalogFormatter for MockCatalogFormatter {
    async fn format(
        &self,
        service_ids: &[ServiceId],
        _language: Option<&str>,
    ) -> Result<Vec<CatalogMetadata>, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::FormatFailed {
                count: service_ids.len(),
                message: "mock formatter configured to fail".to_string(),
            });
        }
        let mut formatted: Vec<CatalogMetadata> = service_ids
            .iter()
            .filter_map(|id| self.entries.get(id))
            .cloned()
            .collect();
        formatted.sort_by(|a, b| a.service_id.cmp(&b.service_id));
        Ok(formatted)
    }
}
