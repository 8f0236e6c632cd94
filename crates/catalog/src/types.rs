use serde::{Deserialize, Serialize};

/// Column headers the catalog file must provide
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Assessment Name",
    "Description",
    "Job Levels",
    "Languages",
    "Assessment Length",
    "Test Type",
    "Remote Testing",
    "Download Link",
    "URL",
];

/// One catalog row
///
/// Fields map to the CSV headers by exact name. Absent values
/// deserialize to empty strings rather than failing the load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    #[serde(rename = "Assessment Name", default)]
    pub assessment_name: String,

    #[serde(rename = "Description", default)]
    pub description: String,

    #[serde(rename = "Job Levels", default)]
    pub job_levels: String,

    #[serde(rename = "Languages", default)]
    pub languages: String,

    #[serde(rename = "Assessment Length", default)]
    pub assessment_length: String,

    #[serde(rename = "Test Type", default)]
    pub test_type: String,

    #[serde(rename = "Remote Testing", default)]
    pub remote_testing: String,

    #[serde(rename = "Download Link", default)]
    pub download_link: String,

    #[serde(rename = "URL", default)]
    pub url: String,
}

impl CatalogRow {
    /// Render the row as embedding input, one labeled field per line
    pub fn to_document_text(&self) -> String {
        format!(
            "Assessment Name: {}\n\
             Description: {}\n\
             Job Levels: {}\n\
             Languages: {}\n\
             Assessment Length: {}\n\
             Test Type: {}\n\
             Remote Testing: {}\n\
             Download Link: {}\n\
             URL: {}",
            self.assessment_name,
            self.description,
            self.job_levels,
            self.languages,
            self.assessment_length,
            self.test_type,
            self.remote_testing,
            self.download_link,
            self.url,
        )
    }
}

/// Full-row text rendering tagged with the row's position in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Rendered text
    pub text: String,

    /// Zero-based position of the source row
    pub row_index: usize,
}
