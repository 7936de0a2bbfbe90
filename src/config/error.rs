use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {variable}")]
    ParseError {
        variable: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("{field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error("default result limit ({default_limit}) exceeds max result limit ({max_limit})")]
    LimitOrder { default_limit: usize, max_limit: usize },
}
