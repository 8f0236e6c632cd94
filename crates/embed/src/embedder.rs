use assessrec_common::Result;
use async_trait::async_trait;

/// Common trait for embedding backends
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Compute the embedding vector for a piece of text
    async fn embed(&self, model: &str, text: &str) -> Result<Vec<f32>>;
}
