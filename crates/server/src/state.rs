use assessrec_catalog::Catalog;
use assessrec_common::AppConfig;
use assessrec_vector::VectorSearchEngine;

/// Shared application state
///
/// Built once in `start_server` and injected into handlers; the catalog
/// table and the index are read-only for the process lifetime.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// In-memory catalog table
    pub catalog: Catalog,

    /// Vector search engine
    pub search: VectorSearchEngine,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, catalog: Catalog, search: VectorSearchEngine) -> Self {
        Self {
            config,
            catalog,
            search,
        }
    }
}
