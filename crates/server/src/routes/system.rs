use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::state::AppState;

/// Liveness check
#[get("/")]
pub async fn home() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().body("API is working fine!"))
}

/// Index statistics
#[get("/stats")]
pub async fn stats(state: web::Data<Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    let (count, model) = state.search.stats();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "total_chunks": count,
        "embedding_model": model,
    })))
}
