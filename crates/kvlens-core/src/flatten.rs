//! Flatten — turns decoded JSON records into one or more flat tables.
//!
//! Strings go straight into their cell. Arrays and objects (in
//! [`NestedMode::Expand`]) leave a type marker in their cell and queue a
//! deferred table:
//!
//! | Field value | Deferred table rows |
//! |-------------|---------------------|
//! | array of N  | N rows keyed `NNN-<key>\|<field>`, in array order |
//! | object      | 1 row keyed `<key>\|<field>` |
//!
//! Deferred tables go on a FIFO queue and are laid out after the table that
//! produced them, so a deferred table's own nested fields land after every
//! table queued before it.

use crate::config::{DisplayConfig, NestedMode, ScalarStyle};
use crate::types::{Record, Row, Table, VALUE_COLUMN};
use serde_json::Value;
use std::collections::VecDeque;

/// One pending table: `(row key, value)` pairs not yet flattened.
#[derive(Debug, Clone, PartialEq)]
struct Job {
    entries: Vec<(String, Value)>,
}

#[derive(Debug, Clone, Copy)]
pub struct Flattener {
    nested: NestedMode,
    scalars: ScalarStyle,
}

impl Flattener {
    pub fn new(nested: NestedMode, scalars: ScalarStyle) -> Self {
        Self { nested, scalars }
    }

    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(display.nested, display.scalars)
    }

    /// Flatten `records` (already in display order) into the primary table
    /// followed by every deferred table, in render order.
    pub fn flatten(&self, records: &[Record]) -> Vec<Table> {
        let primary = Job {
            entries: records
                .iter()
                .map(|record| (record.display_key(), record.value.clone()))
                .collect(),
        };

        let mut queue = VecDeque::from([primary]);
        let mut tables = Vec::new();
        while let Some(job) = queue.pop_front() {
            tables.push(self.run_job(job, &mut queue));
        }
        tables
    }

    fn run_job(&self, job: Job, queue: &mut VecDeque<Job>) -> Table {
        let rows: Vec<Row> = job
            .entries
            .into_iter()
            .map(|(key, value)| self.flatten_row(key, value, queue))
            .collect();
        Table::from_rows(&rows)
    }

    fn flatten_row(&self, key: String, value: Value, queue: &mut VecDeque<Job>) -> Row {
        let fields: Vec<(String, Value)> = match value {
            Value::Object(map) => map.into_iter().collect(),
            other => vec![(VALUE_COLUMN.to_string(), other)],
        };

        let mut row = Row::new(key);
        for (field, value) in fields {
            let cell = self.cell(&value);
            if self.nested == NestedMode::Expand {
                if let Some(job) = deferred_job(&row.key, &field, value) {
                    queue.push_back(job);
                }
            }
            row.cells.push((field, cell));
        }
        row
    }

    fn cell(&self, value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Array(_) | Value::Object(_) if self.nested == NestedMode::Expand => {
                type_name(value).to_string()
            }
            other => match self.scalars {
                ScalarStyle::TypeName => type_name(other).to_string(),
                ScalarStyle::Omit => String::new(),
                ScalarStyle::Value => other.to_string(),
            },
        }
    }
}

impl Default for Flattener {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

fn deferred_job(parent: &str, field: &str, value: Value) -> Option<Job> {
    match value {
        Value::Array(items) => Some(Job {
            entries: items
                .into_iter()
                .enumerate()
                .map(|(i, item)| (format!("{i:03}-{parent}|{field}"), item))
                .collect(),
        }),
        Value::Object(_) => Some(Job {
            entries: vec![(format!("{parent}|{field}"), value)],
        }),
        _ => None,
    }
}

/// Marker shown in place of a value's contents.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
