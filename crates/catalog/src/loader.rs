use std::path::Path;

use assessrec_common::{AssessrecError, Result};
use tracing::info;

use crate::types::{CatalogRow, Document, REQUIRED_COLUMNS};

/// In-memory catalog table
///
/// Loaded once at startup (or at the start of an index build) and never
/// mutated afterwards. Rows are addressed by their zero-based position
/// in the source file.
#[derive(Debug)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

impl Catalog {
    /// Load the catalog from a CSV file
    ///
    /// Fails if the file is unreadable or the header is missing any of
    /// the required columns. Empty cells are kept as empty strings.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| {
                AssessrecError::catalog(format!(
                    "Failed to open catalog {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let headers = reader
            .headers()
            .map_err(|e| {
                AssessrecError::catalog(format!(
                    "Failed to read catalog header {}: {}",
                    path.display(),
                    e
                ))
            })?
            .clone();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(AssessrecError::catalog(format!(
                "Catalog {} is missing required columns: {}",
                path.display(),
                missing.join(", ")
            )));
        }

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: CatalogRow = record.map_err(|e| {
                AssessrecError::catalog(format!("Failed to parse catalog row: {}", e))
            })?;
            rows.push(row);
        }

        info!("Catalog loaded - {} rows from {}", rows.len(), path.display());

        Ok(Self { rows })
    }

    /// Build a catalog directly from rows
    pub fn from_rows(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the catalog has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `index`, if within bounds
    pub fn get(&self, index: usize) -> Option<&CatalogRow> {
        self.rows.get(index)
    }

    /// Render every row as a Document tagged with its position
    pub fn documents(&self) -> Vec<Document> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| Document {
                text: row.to_document_text(),
                row_index,
            })
            .collect()
    }
}
