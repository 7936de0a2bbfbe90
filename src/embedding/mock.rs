use std::collections::HashMap;

use super::{EmbeddingError, EmbeddingModel};

/// In-memory embedding model for tests: returns preconfigured vectors for
/// known texts and fails for unknown ones.
#[derive(Debug, Default)]
pub struct MockEmbeddingModel {
    embeddings: HashMap<String, Vec<f32>>,
}

impl MockEmbeddingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the vector returned for `text`.
    pub fn with_embedding(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.embeddings.insert(text.into(), vector);
        self
    }
}

impl EmbeddingModel for MockEmbeddingModel {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.embeddings
            .get(text)
            .cloned()
            .ok_or_else(|| EmbeddingError::ModelFailed {
                message: format!("no mock embedding registered for {text:?}"),
            })
    }
}
