use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RESULT_LIMIT;
use crate::repository::ServiceFilters;
use crate::similarity::QueryMeters;

/// Input of the structured 3x10D recommendation mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendParams {
    pub meters: QueryMeters,
    pub filters: ServiceFilters,
    pub limit: usize,
    pub rerank: bool,
}

impl RecommendParams {
    pub fn new(meters: QueryMeters, filters: ServiceFilters) -> Self {
        Self {
            meters,
            filters,
            limit: DEFAULT_RESULT_LIMIT,
            rerank: false,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_rerank(mut self, rerank: bool) -> Self {
        self.rerank = rerank;
        self
    }
}

/// Input of the free-text search mode. The search text is sanitized on
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSearchParams {
    search_text: String,
    pub filters: ServiceFilters,
    pub limit: usize,
    pub rerank: bool,
    /// Target language for catalog metadata, `None` keeps the source
    /// language.
    pub language: Option<String>,
}

impl TextSearchParams {
    pub fn new(search_text: &str, filters: ServiceFilters) -> Self {
        Self {
            search_text: sanitize_search_text(search_text),
            filters,
            limit: DEFAULT_RESULT_LIMIT,
            rerank: false,
            language: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_rerank(mut self, rerank: bool) -> Self {
        self.rerank = rerank;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

/// Strips characters outside the allowed set from user-entered search text.
///
/// Allowed: ASCII alphanumerics, Finnish/Swedish letters, Cyrillic letters,
/// spaces and hyphens. Everything else is user noise or injection attempts
/// and gets removed before the text reaches any scorer.
pub fn sanitize_search_text(text: &str) -> String {
    text.chars()
        .filter(|&c| {
            c.is_ascii_alphanumeric()
                || c == ' '
                || c == '-'
                || matches!(c, 'ä' | 'Ä' | 'ö' | 'Ö' | 'å' | 'Å')
                || ('а'..='я').contains(&c)
                || ('А'..='Я').contains(&c)
        })
        .collect()
}
