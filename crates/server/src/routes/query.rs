use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse};
use tracing::{debug, error, info};

use assessrec_catalog::Catalog;
use assessrec_common::AssessrecError;
use assessrec_vector::ScoredChunk;

use crate::state::AppState;
use crate::types::{ErrorResponse, QueryRequest, QueryResponse, RowProjection};

/// Answer a free-text query with the closest catalog rows
#[post("/query")]
pub async fn query(
    body: web::Json<QueryRequest>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let user_query = body.query.as_deref().unwrap_or("");

    if user_query.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: "No query provided".to_string(),
        }));
    }

    let chunks = match state.search.search(user_query, state.config.top_k).await {
        Ok(chunks) => chunks,
        Err(e) => {
            error!("Search failed: {}", e);
            return Ok(error_response(&e));
        }
    };

    if chunks.is_empty() {
        return Ok(HttpResponse::NotFound().json(ErrorResponse {
            error: "No results found. Try a different query.".to_string(),
        }));
    }

    let results = project_chunks(&state.catalog, &chunks);

    info!(
        "Query answered - {} results from {} chunks",
        results.len(),
        chunks.len()
    );
    Ok(HttpResponse::Ok().json(QueryResponse { results }))
}

/// Map retrieved chunks back to catalog rows
///
/// Chunks whose row tag is absent or points outside the loaded table
/// are dropped, not errored: the index may have been built from an
/// older catalog snapshot. Multiple chunks from the same row each
/// produce their own entry; ordering follows the similarity ranking.
pub(crate) fn project_chunks(catalog: &Catalog, chunks: &[ScoredChunk]) -> Vec<RowProjection> {
    let mut results = Vec::new();
    for chunk in chunks {
        match chunk.row_index.and_then(|index| catalog.get(index)) {
            Some(row) => results.push(RowProjection::from(row)),
            None => {
                debug!("Dropping chunk with stale row tag: {:?}", chunk.row_index);
            }
        }
    }
    results
}

fn error_response(err: &AssessrecError) -> HttpResponse {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ErrorResponse {
        error: err.to_string(),
    })
}
