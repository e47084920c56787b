//! Display-field fallback chains for datasets with inconsistent schemas.

use crate::catalog::ProductRecord;

/// Where a candidate value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Normalized column name.
    Named(&'static str),
    /// Column position, for datasets that use none of the expected names.
    Position(usize),
}

/// Ordered candidate lookups with a literal default.
#[derive(Debug, Clone, Copy)]
pub struct FieldChain {
    pub sources: &'static [FieldSource],
    pub default: &'static str,
}

pub const DISPLAY_NAME: FieldChain = FieldChain {
    sources: &[
        FieldSource::Named("name"),
        FieldSource::Named("product_name"),
        FieldSource::Position(0),
    ],
    default: "Skincare Product",
};

pub const BRAND: FieldChain = FieldChain {
    sources: &[
        FieldSource::Named("brand"),
        FieldSource::Named("brand_name"),
        FieldSource::Position(1),
    ],
    default: "Premium Brand",
};

pub const PRICE: FieldChain = FieldChain {
    sources: &[FieldSource::Named("price")],
    default: "N/A",
};

/// First source holding a non-empty value.
pub fn first_present<'a>(record: &'a ProductRecord, sources: &[FieldSource]) -> Option<&'a str> {
    sources.iter().find_map(|source| {
        let cell = match *source {
            FieldSource::Named(name) => record.get(name),
            FieldSource::Position(index) => record.at(index),
        };
        cell.and_then(|c| c.as_display())
    })
}

impl FieldChain {
    /// Never fails: falls back to the literal default.
    pub fn resolve<'a>(&self, record: &'a ProductRecord) -> &'a str {
        first_present(record, self.sources).unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCatalog;

    fn record(headers: &[&str], cells: &[&str]) -> ProductRecord {
        let catalog = ProductCatalog::from_rows(headers, vec![cells.to_vec()]);
        catalog.rows()[0].clone()
    }

    #[test]
    fn name_column_wins() {
        let r = record(&["product_name", "name"], &["Long Name", "Short"]);
        assert_eq!(DISPLAY_NAME.resolve(&r), "Short");
    }

    #[test]
    fn product_name_used_when_name_absent() {
        let r = record(&["label", "product_name"], &["Oily", "Clay Mask"]);
        assert_eq!(DISPLAY_NAME.resolve(&r), "Clay Mask");
    }

    #[test]
    fn empty_name_falls_through() {
        let r = record(&["name", "product_name"], &["", "Toner"]);
        assert_eq!(DISPLAY_NAME.resolve(&r), "Toner");
    }

    #[test]
    fn positional_fallback() {
        let r = record(&["title", "maker"], &["Serum", "Acme"]);
        assert_eq!(DISPLAY_NAME.resolve(&r), "Serum");
        assert_eq!(BRAND.resolve(&r), "Acme");
    }

    #[test]
    fn literal_defaults_when_nothing_present() {
        let r = record(&["name", "product_name"], &["", ""]);
        assert_eq!(DISPLAY_NAME.resolve(&r), "Skincare Product");
        assert_eq!(BRAND.resolve(&r), "Premium Brand");
        assert_eq!(PRICE.resolve(&r), "N/A");
    }

    #[test]
    fn numeric_price_keeps_raw_text() {
        let r = record(&["name", "brand", "price"], &["Gel", "Acme", "12.50"]);
        assert_eq!(PRICE.resolve(&r), "12.50");
    }
}
