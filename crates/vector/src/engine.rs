use std::path::Path;
use std::sync::Arc;

use assessrec_common::Result;
use assessrec_embed::EmbeddingClient;
use tracing::{debug, info, warn};

use crate::builder::INDEX_FILE;
use crate::similarity::cosine_similarity;
use crate::types::{ScoredChunk, VectorIndex};

/// Read-only similarity search over a persisted vector index
pub struct VectorSearchEngine {
    index: VectorIndex,
    client: Arc<dyn EmbeddingClient>,
    embedding_model: String,
}

impl VectorSearchEngine {
    /// Load the index from `store_dir`
    ///
    /// A missing index file yields an empty engine; queries against it
    /// return no results. The index is never reloaded while serving.
    pub fn load(
        store_dir: &Path,
        client: Arc<dyn EmbeddingClient>,
        embedding_model: impl Into<String>,
    ) -> Result<Self> {
        let embedding_model = embedding_model.into();
        let index_path = store_dir.join(INDEX_FILE);

        let index = if index_path.exists() {
            let data = std::fs::read_to_string(&index_path)?;
            serde_json::from_str(&data)?
        } else {
            warn!("No vector index at {}, starting empty", index_path.display());
            VectorIndex::new(&embedding_model, 0)
        };

        info!("Vector search engine initialized - {} chunks", index.count());

        Ok(Self {
            index,
            client,
            embedding_model,
        })
    }

    /// Return the `top_k` chunks nearest to `query`
    pub async fn search(&self, query: &str, top_k: usize) -> Result<Vec<ScoredChunk>> {
        debug!("Searching for: {} (top_k={})", query, top_k);

        let query_embedding = self.client.embed(&self.embedding_model, query).await?;

        let mut results: Vec<ScoredChunk> = self
            .index
            .entries
            .iter()
            .map(|entry| ScoredChunk {
                score: cosine_similarity(&query_embedding, &entry.embedding),
                text: entry.text.clone(),
                row_index: entry.row_index,
            })
            .collect();

        // Sort by score (descending)
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);

        info!("Search completed - {} results", results.len());
        Ok(results)
    }

    /// Chunk count and the model recorded at build time
    pub fn stats(&self) -> (usize, String) {
        (self.index.count(), self.index.embedding_model.clone())
    }
}
