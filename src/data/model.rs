// ---------------------------------------------------------------------------
// Column schema
// ---------------------------------------------------------------------------

/// The 11 physicochemical feature columns, in file order.
pub const FEATURE_COLUMNS: [&str; 11] = [
    "fixed acidity",
    "volatile acidity",
    "citric acid",
    "residual sugar",
    "chlorides",
    "free sulfur dioxide",
    "total sulfur dioxide",
    "density",
    "pH",
    "sulphates",
    "alcohol",
];

/// The integer quality label column.
pub const QUALITY_COLUMN: &str = "quality";

// ---------------------------------------------------------------------------
// RawTable – the dataset as read from disk
// ---------------------------------------------------------------------------

/// Header plus unparsed text cells, exactly as they appear in the file.
/// Invariant: every row has the same arity as the header (the loader
/// rejects ragged input).
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Ordered column names from the header row.
    pub columns: Vec<String>,
    /// Row-major cells, still text.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Position of a column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

// ---------------------------------------------------------------------------
// Table – the cleaned dataset
// ---------------------------------------------------------------------------

/// The cleaned table: same columns as the raw input, every cell numeric,
/// no missing values, and `quality` truncated to an integer category.
/// Read-only after cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Ordered column names, unchanged from the raw header.
    pub columns: Vec<String>,
    /// Row-major numeric cells.
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    /// Position of a column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of a named column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Every column as its own vector, in header order.
    pub fn column_vectors(&self) -> Vec<Vec<f64>> {
        (0..self.columns.len())
            .map(|i| self.rows.iter().map(|row| row[i]).collect())
            .collect()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> Table {
        Table {
            columns: vec!["alcohol".to_string(), "quality".to_string()],
            rows: vec![vec![9.4, 5.0], vec![10.2, 6.0], vec![11.0, 7.0]],
        }
    }

    #[test]
    fn column_lookup_by_name() {
        let table = small_table();
        assert_eq!(table.column_index("quality"), Some(1));
        assert_eq!(table.column_index("density"), None);
        assert_eq!(table.column("alcohol"), Some(vec![9.4, 10.2, 11.0]));
        assert_eq!(table.column("missing"), None);
    }

    #[test]
    fn column_vectors_preserve_header_order() {
        let table = small_table();
        let cols = table.column_vectors();
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0], vec![9.4, 10.2, 11.0]);
        assert_eq!(cols[1], vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn empty_table_reports_empty() {
        let table = Table {
            columns: vec!["alcohol".to_string()],
            rows: Vec::new(),
        };
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
