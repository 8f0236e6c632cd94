use crate::error::AssessrecError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Assessrec application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog CSV file path
    pub csv_path: PathBuf,

    /// Vector store directory (owned by the indexer, read by the server)
    pub vectorstore_dir: PathBuf,

    /// Ollama API base URL
    pub ollama_base_url: String,

    /// Embedding model name
    pub embedding_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Number of nearest chunks retrieved per query
    pub top_k: usize,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("./product_details.csv"),
            vectorstore_dir: PathBuf::from("./data"),
            ollama_base_url: "http://localhost:11434".to_string(),
            embedding_model: "all-minilm".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 4000,
            top_k: 10,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, AssessrecError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            csv_path: Self::get_env_path("CSV_PATH")
                .unwrap_or_else(|| PathBuf::from("./product_details.csv")),
            vectorstore_dir: Self::get_env_path("VECTORSTORE_DIR")
                .unwrap_or_else(|| PathBuf::from("./data")),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "all-minilm".to_string()),
            server_host: std::env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4000),
            top_k: std::env::var("TOP_K")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            log_dir: Self::get_env_path("LOG_DIR")
                .unwrap_or_else(|| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Path to the persisted index file inside the vector store directory
    pub fn index_file_path(&self) -> PathBuf {
        self.vectorstore_dir.join("index.json")
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AssessrecError> {
        if self.embedding_model.is_empty() {
            return Err(AssessrecError::config("Embedding model name cannot be empty"));
        }

        if !self.ollama_base_url.starts_with("http://")
            && !self.ollama_base_url.starts_with("https://") {
            return Err(AssessrecError::config(
                "Ollama base URL must start with http:// or https://"
            ));
        }

        if self.server_port == 0 {
            return Err(AssessrecError::config("Server port cannot be 0"));
        }

        if self.top_k == 0 {
            return Err(AssessrecError::config("TOP_K must be at least 1"));
        }

        Ok(())
    }
}
