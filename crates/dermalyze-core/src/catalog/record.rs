use super::cell::CellValue;

/// One dataset row: cells keyed by normalized column name, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    fields: Vec<(String, CellValue)>,
}

impl ProductRecord {
    pub(crate) fn from_cells<C>(columns: &[String], cells: C) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let mut cells = cells.into_iter();
        let fields = columns
            .iter()
            .map(|col| {
                let value = cells
                    .next()
                    .map(|c| CellValue::classify(c.as_ref()))
                    .unwrap_or(CellValue::Empty);
                (col.clone(), value)
            })
            .collect();
        Self { fields }
    }

    /// Cell for `column`. With duplicate column names the first one wins.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Cell at column position `index`.
    pub fn at(&self, index: usize) -> Option<&CellValue> {
        self.fields.get(index).map(|(_, value)| value)
    }

    pub fn fields(&self) -> &[(String, CellValue)] {
        &self.fields
    }
}
