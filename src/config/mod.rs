//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RECOMMENDER_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_CONCURRENT_TASKS, DEFAULT_RESULT_LIMIT};

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hard cap on concurrently executing pipeline requests per worker.
    /// Default: `2`.
    pub max_concurrent_tasks: usize,

    /// Number of services returned when the request gives no limit.
    /// Default: `5`.
    pub default_result_limit: usize,

    /// Upper bound on the per-request result limit. Default: `20`.
    pub max_result_limit: usize,

    /// Path to the serialized embedding model, when text search is enabled.
    pub embedding_model_path: Option<PathBuf>,

    /// Path to the serialized reranker model, when reranking is enabled.
    pub reranker_model_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_tasks: DEFAULT_MAX_CONCURRENT_TASKS,
            default_result_limit: DEFAULT_RESULT_LIMIT,
            max_result_limit: 20,
            embedding_model_path: None,
            reranker_model_path: None,
        }
    }
}

impl Config {
    const ENV_MAX_TASKS: &'static str = "RECOMMENDER_MAX_TASKS";
    const ENV_DEFAULT_LIMIT: &'static str = "RECOMMENDER_DEFAULT_LIMIT";
    const ENV_MAX_LIMIT: &'static str = "RECOMMENDER_MAX_LIMIT";
    const ENV_EMBEDDING_MODEL_PATH: &'static str = "RECOMMENDER_EMBEDDING_MODEL_PATH";
    const ENV_RERANKER_MODEL_PATH: &'static str = "RECOMMENDER_RERANKER_MODEL_PATH";

    /// Loads configuration from environment variables (falling back to
    /// defaults), then validates it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            max_concurrent_tasks: Self::parse_usize_from_env(
                Self::ENV_MAX_TASKS,
                defaults.max_concurrent_tasks,
            )?,
            default_result_limit: Self::parse_usize_from_env(
                Self::ENV_DEFAULT_LIMIT,
                defaults.default_result_limit,
            )?,
            max_result_limit: Self::parse_usize_from_env(
                Self::ENV_MAX_LIMIT,
                defaults.max_result_limit,
            )?,
            embedding_model_path: Self::parse_optional_path_from_env(
                Self::ENV_EMBEDDING_MODEL_PATH,
            ),
            reranker_model_path: Self::parse_optional_path_from_env(Self::ENV_RERANKER_MODEL_PATH),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_tasks == 0 {
            return Err(ConfigError::ZeroValue {
                field: "max_concurrent_tasks",
            });
        }
        if self.default_result_limit == 0 {
            return Err(ConfigError::ZeroValue {
                field: "default_result_limit",
            });
        }
        if self.default_result_limit > self.max_result_limit {
            return Err(ConfigError::LimitOrder {
                default_limit: self.default_result_limit,
                max_limit: self.max_result_limit,
            });
        }
        Ok(())
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|source| ConfigError::ParseError {
                variable: var_name,
                value,
                source,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
