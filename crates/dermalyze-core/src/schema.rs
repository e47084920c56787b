//! Heuristic detection of the skin-type label column.
//!
//! Exact names are tried first in priority order, then any column whose name
//! contains one of the substring candidates. Substring matching is loose on
//! purpose: a column such as `category_id` will be picked up.

use serde::Serialize;

use crate::catalog::normalize_column_name;

/// Exact column names, highest priority first.
pub const EXACT_CANDIDATES: [&str; 4] = ["label", "skin_type", "category", "type"];

/// Substrings tried after the exact pass, highest priority first.
pub const SUBSTRING_CANDIDATES: [&str; 4] = ["label", "skin", "type", "category"];

/// Outcome of label-column detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ColumnResolution {
    Resolved { column: String },
    /// No candidate matched; carries the (normalized) column list for diagnostics.
    Unresolved { columns: Vec<String> },
}

impl ColumnResolution {
    pub fn column(&self) -> Option<&str> {
        match self {
            ColumnResolution::Resolved { column } => Some(column),
            ColumnResolution::Unresolved { .. } => None,
        }
    }
}

/// Find the column most likely to hold a skin-type label. Column names are
/// normalized before comparison and the normalized name is returned.
pub fn resolve_label_column<S: AsRef<str>>(columns: &[S]) -> ColumnResolution {
    let normalized: Vec<String> = columns
        .iter()
        .map(|c| normalize_column_name(c.as_ref()))
        .collect();

    let exact = EXACT_CANDIDATES
        .iter()
        .find_map(|cand| normalized.iter().find(|col| col.as_str() == *cand));

    let hit = exact.or_else(|| {
        SUBSTRING_CANDIDATES
            .iter()
            .find_map(|cand| normalized.iter().find(|col| col.contains(cand)))
    });

    match hit {
        Some(column) => {
            tracing::debug!("label column resolved to {column:?}");
            ColumnResolution::Resolved {
                column: column.clone(),
            }
        }
        None => {
            tracing::warn!("no label column among {:?}", normalized);
            ColumnResolution::Unresolved {
                columns: normalized,
            }
        }
    }
}
