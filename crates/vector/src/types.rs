use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One indexed chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkEntry {
    /// Chunk text
    pub text: String,

    /// Position of the source row in the catalog the index was built
    /// from. None means the chunk carries no row provenance.
    pub row_index: Option<usize>,

    /// Embedding vector
    pub embedding: Vec<f32>,
}

/// Persisted vector index
///
/// Rebuilt wholesale by the indexer; the search engine treats it as
/// read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorIndex {
    /// Indexed chunks, in build order
    pub entries: Vec<ChunkEntry>,

    /// Embedding model used at build time
    pub embedding_model: String,

    /// Embedding dimension
    pub embedding_dim: usize,

    /// Build timestamp
    pub built_at: DateTime<Utc>,
}

impl VectorIndex {
    /// Create new empty index
    pub fn new(embedding_model: impl Into<String>, embedding_dim: usize) -> Self {
        Self {
            entries: Vec::new(),
            embedding_model: embedding_model.into(),
            embedding_dim,
            built_at: Utc::now(),
        }
    }

    /// Add entry to index
    pub fn add_entry(&mut self, entry: ChunkEntry) {
        self.entries.push(entry);
    }

    /// Number of indexed chunks
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Search result
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    /// Similarity score (cosine)
    pub score: f32,

    /// Chunk text
    pub text: String,

    /// Source row position, if known
    pub row_index: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_index_is_empty() {
        let index = VectorIndex::new("all-minilm", 384);
        assert_eq!(index.count(), 0);
        assert_eq!(index.embedding_model, "all-minilm");
        assert_eq!(index.embedding_dim, 384);
    }

    #[test]
    fn test_entries_keep_build_order() {
        let mut index = VectorIndex::new("all-minilm", 2);
        index.add_entry(ChunkEntry {
            text: "first".to_string(),
            row_index: Some(0),
            embedding: vec![1.0, 0.0],
        });
        index.add_entry(ChunkEntry {
            text: "second".to_string(),
            row_index: None,
            embedding: vec![0.0, 1.0],
        });

        assert_eq!(index.count(), 2);
        assert_eq!(index.entries[0].text, "first");
        assert_eq!(index.entries[1].row_index, None);
    }

    #[test]
    fn test_index_round_trips_through_json() {
        let mut index = VectorIndex::new("all-minilm", 2);
        index.add_entry(ChunkEntry {
            text: "chunk".to_string(),
            row_index: Some(3),
            embedding: vec![0.5, -0.5],
        });

        let json = serde_json::to_string(&index).unwrap();
        let loaded: VectorIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.count(), 1);
        assert_eq!(loaded.entries[0].row_index, Some(3));
        assert_eq!(loaded.entries[0].embedding, vec![0.5, -0.5]);
    }
}
