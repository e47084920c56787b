//! CSV loading for the product catalog.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::ProductCatalog;
use crate::error::CatalogError;

/// Normalize a header: trim, lowercase, spaces to underscores.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

impl ProductCatalog {
    /// Load a CSV dataset with a header row. A missing file is reported as
    /// [`CatalogError::MissingDataset`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CatalogError::MissingDataset {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => {
                return Err(CatalogError::Open {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let catalog = Self::from_reader(file)?;
        tracing::info!(
            "loaded product dataset {} ({} rows, columns: {})",
            path.display(),
            catalog.len(),
            catalog.columns().join(", ")
        );
        Ok(catalog)
    }

    /// Parse CSV text from any reader. Ragged rows are tolerated.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }
        Ok(Self::from_rows(headers, rows))
    }
}
