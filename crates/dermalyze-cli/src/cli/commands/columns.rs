//! `dermalyze columns` – dataset schema diagnostics.

use anyhow::Result;
use dermalyze_core::recommend::Recommender;
use dermalyze_core::schema::{resolve_label_column, ColumnResolution};

pub fn run_columns(recommender: &Recommender) -> Result<()> {
    let catalog = match recommender.catalog() {
        Ok(c) => c,
        Err(e) => {
            println!("Product dataset unavailable: {e}");
            return Ok(());
        }
    };

    println!("{} rows, {} columns:", catalog.len(), catalog.columns().len());
    for col in catalog.columns() {
        println!("  {col}");
    }
    match resolve_label_column(catalog.columns()) {
        ColumnResolution::Resolved { column } => println!("Skin-type column: {column}"),
        ColumnResolution::Unresolved { .. } => println!("Skin-type column: not found"),
    }
    Ok(())
}
