//! Read-only product catalog.
//!
//! The dataset is loaded once at startup and passed by reference to the
//! filter, so there is no process-wide cache: picking up dataset changes
//! requires building a new catalog (in practice, a restart).

mod cell;
mod load;
mod record;

pub use cell::CellValue;
pub use load::normalize_column_name;
pub use record::ProductRecord;

/// Product dataset with normalized column names.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    columns: Vec<String>,
    rows: Vec<ProductRecord>,
}

impl ProductCatalog {
    /// Build from raw headers and rows. Headers are normalized; rows shorter than
    /// the header are padded with empty cells, extra cells are dropped.
    pub fn from_rows<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let columns: Vec<String> = headers
            .into_iter()
            .map(|h| normalize_column_name(h.as_ref()))
            .collect();
        let rows = rows
            .into_iter()
            .map(|row| ProductRecord::from_cells(&columns, row))
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ProductRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
