//! Typed dataset cells.

/// One dataset cell. Only `Text` cells take part in keyword matching.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    /// Numeric cell, kept as the raw text so display keeps the original formatting.
    Number(String),
    Text(String),
}

impl CellValue {
    /// Classify a raw CSV cell. Surrounding whitespace is trimmed.
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        if trimmed.parse::<i64>().is_ok() || trimmed.parse::<f64>().is_ok() {
            return CellValue::Number(trimmed.to_string());
        }
        CellValue::Text(trimmed.to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Displayable value, if the cell is non-empty.
    pub fn as_display(&self) -> Option<&str> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(s) | CellValue::Text(s) => Some(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_cells() {
        assert_eq!(CellValue::classify("  "), CellValue::Empty);
        assert_eq!(CellValue::classify("42"), CellValue::Number("42".into()));
        assert_eq!(CellValue::classify("12.50"), CellValue::Number("12.50".into()));
        assert_eq!(CellValue::classify(" Oily skin "), CellValue::Text("Oily skin".into()));
    }

    #[test]
    fn numbers_are_displayable_but_not_text() {
        let n = CellValue::classify("3");
        assert_eq!(n.as_text(), None);
        assert_eq!(n.as_display(), Some("3"));
        assert_eq!(CellValue::Empty.as_display(), None);
    }
}
