//! HTTP surface tests
//!
//! Routes are exercised against a real engine backed by a temporary
//! index and an in-process embedding stub; no network involved.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use async_trait::async_trait;

use assessrec_catalog::{Catalog, CatalogRow};
use assessrec_common::{AppConfig, Result};
use assessrec_embed::EmbeddingClient;
use assessrec_server::{configure, AppState};
use assessrec_vector::{ChunkEntry, VectorIndex, VectorSearchEngine, INDEX_FILE};

/// Deterministic letter-histogram embedding
struct StubEmbedder;

#[async_trait]
impl EmbeddingClient for StubEmbedder {
    async fn embed(&self, _model: &str, text: &str) -> Result<Vec<f32>> {
        let mut v = vec![0.0f32; 26];
        for c in text.to_lowercase().chars() {
            if c.is_ascii_lowercase() {
                v[(c as u8 - b'a') as usize] += 1.0;
            }
        }
        Ok(v)
    }
}

fn filler_row(name: &str) -> CatalogRow {
    CatalogRow {
        assessment_name: name.to_string(),
        ..CatalogRow::default()
    }
}

fn logic_test_row() -> CatalogRow {
    CatalogRow {
        assessment_name: "Logic Test".to_string(),
        description: "Measures abstract reasoning".to_string(),
        job_levels: "Entry".to_string(),
        languages: "English".to_string(),
        assessment_length: "30 min".to_string(),
        test_type: "Cognitive".to_string(),
        remote_testing: "Yes".to_string(),
        download_link: "http://x/dl".to_string(),
        url: "http://x/info".to_string(),
    }
}

async fn entry(text: &str, row_index: Option<usize>) -> ChunkEntry {
    ChunkEntry {
        text: text.to_string(),
        row_index,
        embedding: StubEmbedder.embed("all-minilm", text).await.unwrap(),
    }
}

fn state_with(rows: Vec<CatalogRow>, entries: Vec<ChunkEntry>) -> Arc<AppState> {
    let store = tempfile::tempdir().unwrap();

    let mut index = VectorIndex::new("all-minilm", 26);
    for e in entries {
        index.add_entry(e);
    }
    std::fs::write(
        store.path().join(INDEX_FILE),
        serde_json::to_string(&index).unwrap(),
    )
    .unwrap();

    let search =
        VectorSearchEngine::load(store.path(), Arc::new(StubEmbedder), "all-minilm").unwrap();

    Arc::new(AppState::new(
        AppConfig::default(),
        Catalog::from_rows(rows),
        search,
    ))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_home_is_alive() {
    let app = app!(state_with(vec![], vec![]));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"API is working fine!");
}

#[actix_web::test]
async fn test_empty_query_is_rejected() {
    let app = app!(state_with(vec![filler_row("a")], vec![]));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({"query": ""}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({"error": "No query provided"}));
}

#[actix_web::test]
async fn test_missing_query_key_is_rejected() {
    let app = app!(state_with(vec![filler_row("a")], vec![]));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_empty_index_yields_not_found() {
    let app = app!(state_with(vec![filler_row("a")], vec![]));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({"query": "anything"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({"error": "No results found. Try a different query."})
    );
}

#[actix_web::test]
async fn test_matching_query_projects_row_fields() {
    // Row 3 is the target; earlier rows are padding
    let rows = vec![
        filler_row("a"),
        filler_row("b"),
        filler_row("c"),
        logic_test_row(),
    ];
    let entries = vec![entry("Measures abstract reasoning and logic", Some(3)).await];

    let app = app!(state_with(rows, entries));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({"query": "abstract reasoning test"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "results": [{
                "Assessment Name": "Logic Test",
                "Assessment Length": "30 min",
                "Test Type": "Cognitive",
                "Remote Testing": "Yes",
                "URL": "http://x/info"
            }]
        })
    );
}

#[actix_web::test]
async fn test_stale_row_tags_shrink_results() {
    let rows = vec![logic_test_row()];
    let entries = vec![
        entry("abstract reasoning", Some(0)).await,
        entry("abstract reasoning again", Some(7)).await, // out of bounds
        entry("abstract reasoning untagged", None).await,
    ];

    let app = app!(state_with(rows, entries));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({"query": "reasoning"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["Assessment Name"], "Logic Test");
}

#[actix_web::test]
async fn test_same_row_chunks_each_contribute() {
    let rows = vec![logic_test_row()];
    let entries = vec![
        entry("abstract reasoning part one", Some(0)).await,
        entry("abstract reasoning part two", Some(0)).await,
    ];

    let app = app!(state_with(rows, entries));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({"query": "reasoning"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_stats_reports_index_size_and_model() {
    let entries = vec![entry("abstract reasoning", Some(0)).await];
    let app = app!(state_with(vec![logic_test_row()], entries));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/stats").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({"total_chunks": 1, "embedding_model": "all-minilm"})
    );
}
