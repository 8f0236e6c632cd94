use assessrec_catalog::CatalogRow;
use serde::{Deserialize, Serialize};

/// Query request body
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Free-text query; a missing key is treated as empty
    #[serde(default)]
    pub query: Option<String>,
}

/// Successful query response
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub results: Vec<RowProjection>,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The subset of catalog fields returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowProjection {
    #[serde(rename = "Assessment Name")]
    pub assessment_name: String,

    #[serde(rename = "Assessment Length")]
    pub assessment_length: String,

    #[serde(rename = "Test Type")]
    pub test_type: String,

    #[serde(rename = "Remote Testing")]
    pub remote_testing: String,

    #[serde(rename = "URL")]
    pub url: String,
}

impl From<&CatalogRow> for RowProjection {
    fn from(row: &CatalogRow) -> Self {
        Self {
            assessment_name: row.assessment_name.clone(),
            assessment_length: row.assessment_length.clone(),
            test_type: row.test_type.clone(),
            remote_testing: row.remote_testing.clone(),
            url: row.url.clone(),
        }
    }
}
