//! Core types shared by the query, flatten and render layers.
//!
//! A [`Record`] is what a scan produces, a [`Row`] is a record after its
//! fields have been turned into display strings, and a [`Table`] is a set of
//! rows laid out under one column set.

use serde_json::{Map, Value};

/// Header of the first column of every table.
pub const PRIMARY_KEY_COLUMN: &str = "primary key";

/// Column used for values that are not JSON objects.
pub const VALUE_COLUMN: &str = "value";

/// One key/value pair read from a container, with the value decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Raw key bytes as stored.
    pub key: Vec<u8>,
    /// Decoded JSON value. Undecodable bytes become an empty object.
    pub value: Value,
}

impl Record {
    /// Decode `bytes` as JSON. Invalid JSON is not an error: the record keeps
    /// its key and gets no fields.
    pub fn decode(key: Vec<u8>, bytes: &[u8]) -> Self {
        let value = match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(
                    key = %String::from_utf8_lossy(&key),
                    error = %err,
                    "value is not JSON, showing no fields"
                );
                Value::Object(Map::new())
            }
        };
        Self { key, value }
    }

    /// The key as shown in the `primary key` column.
    pub fn display_key(&self) -> String {
        String::from_utf8_lossy(&self.key).into_owned()
    }
}

/// A flattened record: primary key plus `(column, cell)` pairs in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub cells: Vec<(String, String)>,
}

impl Row {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            cells: Vec::new(),
        }
    }

    pub fn cell(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell.as_str())
    }
}

/// Rows under a fixed column set, ready to render.
///
/// The column set is `primary key` followed by the columns of the *first*
/// row. Later rows missing a column show an empty cell; columns only later
/// rows have are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows(rows: &[Row]) -> Self {
        let Some(first) = rows.first() else {
            return Self::default();
        };

        let mut columns = vec![PRIMARY_KEY_COLUMN.to_string()];
        columns.extend(first.cells.iter().map(|(name, _)| name.clone()));

        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .enumerate()
                    .map(|(i, column)| {
                        if i == 0 {
                            row.key.clone()
                        } else {
                            row.cell(column).unwrap_or_default().to_string()
                        }
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of the column named `column`, top to bottom.
    pub fn column(&self, column: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|c| c == column)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(key: &str, cells: &[(&str, &str)]) -> Row {
        Row {
            key: key.to_string(),
            cells: cells
                .iter()
                .map(|(c, v)| (c.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn first_row_fixes_columns() {
        let table = Table::from_rows(&[
            row("a", &[("name", "alice"), ("role", "admin")]),
            row("b", &[("name", "bob"), ("team", "ops")]),
        ]);

        assert_eq!(table.columns, vec!["primary key", "name", "role"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["a".to_string(), "alice".to_string(), "admin".to_string()],
                vec!["b".to_string(), "bob".to_string(), String::new()],
            ]
        );
    }

    #[test]
    fn no_rows_means_no_columns() {
        let table = Table::from_rows(&[]);
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }

    #[test]
    fn invalid_json_decodes_to_empty_object() {
        let record = Record::decode(b"k".to_vec(), b"{not json");
        assert_eq!(record.value, Value::Object(Map::new()));
        assert_eq!(record.display_key(), "k");
    }
}
