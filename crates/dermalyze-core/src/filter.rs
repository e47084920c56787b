//! Keyword filter over the product catalog.

use crate::catalog::{ProductCatalog, ProductRecord};
use crate::schema::ColumnResolution;

/// Result of filtering the catalog for one keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome<'a> {
    /// No label column; filtering was skipped.
    Unresolved { columns: Vec<String> },
    NoMatches,
    /// Matching rows in dataset order, at most `limit` of them.
    Matches(Vec<&'a ProductRecord>),
}

/// Case-insensitive substring test of `keyword` against the resolved column.
/// Empty and numeric cells never match.
pub fn filter_products<'a>(
    catalog: &'a ProductCatalog,
    resolution: &ColumnResolution,
    keyword: &str,
    limit: usize,
) -> FilterOutcome<'a> {
    let column = match resolution {
        ColumnResolution::Resolved { column } => column,
        ColumnResolution::Unresolved { columns } => {
            return FilterOutcome::Unresolved {
                columns: columns.clone(),
            }
        }
    };

    let needle = keyword.to_lowercase();
    let matches: Vec<&ProductRecord> = catalog
        .rows()
        .iter()
        .filter(|row| {
            row.get(column)
                .and_then(|cell| cell.as_text())
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
        .take(limit)
        .collect();

    tracing::debug!(
        "keyword {keyword:?} on column {column:?}: {} match(es) (limit {limit})",
        matches.len()
    );

    if matches.is_empty() {
        FilterOutcome::NoMatches
    } else {
        FilterOutcome::Matches(matches)
    }
}
