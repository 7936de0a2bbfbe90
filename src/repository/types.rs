use serde::{Deserialize, Serialize};

use crate::similarity::ServiceId;

/// Catalog filters applied before any ranking.
///
/// Region, hospital-district and wellbeing-county codes are resolved into
/// plain municipality codes by the caller before this struct is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFilters {
    pub municipality_codes: Vec<String>,
    pub include_national_services: bool,
    pub service_classes: Vec<String>,
    pub target_groups: Vec<String>,
    pub service_collections: Vec<String>,
    pub funding_type: Vec<String>,
}

impl ServiceFilters {
    /// Filters matching every municipality, national services included.
    pub fn national() -> Self {
        Self {
            include_national_services: true,
            ..Self::default()
        }
    }

    pub fn for_municipalities(codes: Vec<String>) -> Self {
        Self {
            municipality_codes: codes,
            include_national_services: true,
            ..Self::default()
        }
    }
}

/// Untranslated descriptive texts of one service, used for BM25 features.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptions {
    pub service_description: String,
    pub description_summary: String,
    pub user_instruction: String,
}

impl ServiceDescriptions {
    /// Concatenation fed to the lexical tokenizer.
    pub fn joined(&self) -> String {
        format!(
            "{} {} {}",
            self.service_description, self.description_summary, self.user_instruction
        )
    }
}

/// One contact channel of a service (web page, phone, office).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceChannel {
    pub service_channel_id: String,
    pub service_channel_name: String,
    pub service_channel_type: String,
    pub service_channel_description_summary: String,
    #[serde(default)]
    pub web_pages: Vec<String>,
}

/// Formatted catalog entry of one recommendable service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub service_id: ServiceId,
    pub service_name: String,
    pub service_description: String,
    pub description_summary: String,
    pub user_instruction: String,
    #[serde(default)]
    pub service_channels: Vec<ServiceChannel>,
}
