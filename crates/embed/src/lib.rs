//! Assessrec embedding layer
//!
//! Embedding API client and deterministic text chunking

mod chunking;
mod client;
mod embedder;
mod types;

pub use chunking::{chunk_text, TextChunk, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
pub use client::OllamaClient;
pub use embedder::EmbeddingClient;
pub use types::{EmbedRequest, EmbedResponse};
