use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository query failed: {message}")]
    QueryFailed { message: String },

    #[error("catalog formatting failed for {count} services: {message}")]
    FormatFailed { count: usize, message: String },
}
