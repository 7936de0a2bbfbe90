use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimilarityError {
    /// No service vector has a non-zero value on any queried meter. This is
    /// a data condition, not a fault; the pipeline recovers it into an
    /// empty result list.
    #[error("no service vectors have signal on the requested dimensions")]
    NoSignal,
}
