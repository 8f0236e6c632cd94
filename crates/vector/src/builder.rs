use std::path::{Path, PathBuf};
use std::sync::Arc;

use assessrec_catalog::Catalog;
use assessrec_common::Result;
use assessrec_embed::{chunk_text, EmbeddingClient, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use tracing::info;

use crate::types::{ChunkEntry, VectorIndex};

/// Index file name inside the vector store directory
pub const INDEX_FILE: &str = "index.json";

/// Builds the persisted vector index from a catalog file
///
/// Rebuilds are wholesale: any existing store directory is deleted
/// before the new index is written. There is no incremental mode.
pub struct IndexBuilder {
    store_dir: PathBuf,
    client: Arc<dyn EmbeddingClient>,
    embedding_model: String,
}

impl IndexBuilder {
    /// Create new index builder
    pub fn new(
        store_dir: impl Into<PathBuf>,
        client: Arc<dyn EmbeddingClient>,
        embedding_model: impl Into<String>,
    ) -> Self {
        Self {
            store_dir: store_dir.into(),
            client,
            embedding_model: embedding_model.into(),
        }
    }

    /// Build the index from the catalog at `catalog_path`
    ///
    /// Each row is rendered as a labeled document, split into chunks,
    /// embedded chunk by chunk and persisted together with its source
    /// row position.
    pub async fn build(&self, catalog_path: &Path) -> Result<VectorIndex> {
        if self.store_dir.exists() {
            info!("Deleting old vector store at {}", self.store_dir.display());
            std::fs::remove_dir_all(&self.store_dir)?;
        }

        info!("Building vector store from {}", catalog_path.display());
        let catalog = Catalog::load(catalog_path)?;

        let mut entries = Vec::new();
        for document in catalog.documents() {
            let chunks = chunk_text(&document.text, DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP);
            for chunk in chunks {
                let embedding = self
                    .client
                    .embed(&self.embedding_model, &chunk.text)
                    .await?;
                entries.push(ChunkEntry {
                    text: chunk.text,
                    row_index: Some(document.row_index),
                    embedding,
                });
            }
        }

        let index = VectorIndex {
            embedding_model: self.embedding_model.clone(),
            embedding_dim: entries.first().map(|e| e.embedding.len()).unwrap_or(0),
            built_at: chrono::Utc::now(),
            entries,
        };

        std::fs::create_dir_all(&self.store_dir)?;
        let data = serde_json::to_string(&index)?;
        std::fs::write(self.store_dir.join(INDEX_FILE), data)?;

        info!(
            "Vector store built and persisted - {} chunks from {} rows",
            index.count(),
            catalog.len()
        );
        Ok(index)
    }
}
