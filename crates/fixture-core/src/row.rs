//! Row and table-rows types consumed by the fixture loaders.

use crate::value::FixtureValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single record to insert: a mapping from column name to value.
///
/// Columns are stored sorted by name so the generated statement text is
/// deterministic for a given row. Rows destined for the same table may
/// carry differing column sets; the loader lists exactly each row's
/// columns in its INSERT.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    columns: BTreeMap<String, FixtureValue>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column to the row, replacing any previous value for the name.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<FixtureValue>) -> Self {
        self.set(column, value);
        self
    }

    /// Set a column value in place.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<FixtureValue>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Get a column value by name.
    pub fn get(&self, column: &str) -> Option<&FixtureValue> {
        self.columns.get(column)
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over `(column, value)` pairs in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FixtureValue)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, (column, value)) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{column}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// All rows destined for one table, inserted in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRows {
    /// Target table name.
    pub table: String,

    /// Rows to insert, in insertion order.
    pub rows: Vec<Row>,
}

impl TableRows {
    /// Create an empty row set for a table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the set has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_builder() {
        let row = Row::new().with("id", 1_i32).with("name", "alice");

        assert_eq!(row.len(), 2);
        assert_eq!(row.get("id"), Some(&FixtureValue::Int(1)));
        assert_eq!(
            row.get("name"),
            Some(&FixtureValue::Text("alice".to_string()))
        );
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_row_iterates_in_column_order() {
        let row = Row::new()
            .with("zeta", 1_i32)
            .with("alpha", 2_i32)
            .with("mid", 3_i32);

        let columns: Vec<&str> = row.iter().map(|(c, _)| c).collect();
        assert_eq!(columns, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_row_with_replaces_existing_column() {
        let row = Row::new().with("id", 1_i32).with("id", 2_i32);
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("id"), Some(&FixtureValue::Int(2)));
    }

    #[test]
    fn test_row_display() {
        let row = Row::new()
            .with("id", 1_i32)
            .with("name", "alice")
            .with("deleted_at", None::<i32>);

        assert_eq!(
            row.to_string(),
            "{deleted_at: NULL, id: 1, name: \"alice\"}"
        );
        assert_eq!(Row::new().to_string(), "{}");
    }

    #[test]
    fn test_table_rows_builder() {
        let rows = TableRows::new("users")
            .row(Row::new().with("id", 1_i32))
            .row(Row::new().with("id", 2_i32));

        assert_eq!(rows.table, "users");
        assert_eq!(rows.len(), 2);
        assert!(!rows.is_empty());
        assert!(TableRows::new("empty").is_empty());
    }
}
