//! Assessrec HTTP server
//!
//! Actix-web REST API over the in-memory catalog table and the
//! persisted vector index

mod routes;
mod state;
mod types;

pub use state::AppState;
pub use types::{ErrorResponse, QueryRequest, QueryResponse, RowProjection};

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

use assessrec_catalog::Catalog;
use assessrec_common::{AppConfig, Result};
use assessrec_embed::OllamaClient;
use assessrec_vector::VectorSearchEngine;

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::system::home)
        .service(routes::system::stats)
        .service(routes::query::query);
}

/// Load the catalog and the index, then serve until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;

    let catalog = Catalog::load(&config.csv_path)?;
    let client = Arc::new(OllamaClient::new(&config.ollama_base_url)?);
    let search =
        VectorSearchEngine::load(&config.vectorstore_dir, client, &config.embedding_model)?;

    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::new(config, catalog, search));

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .configure(configure)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
