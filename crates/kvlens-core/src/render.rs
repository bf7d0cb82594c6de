//! Render — lays out a [`Table`] as bordered text.
//!
//! ```text
//! +-------------+-------+
//! | PRIMARY KEY | NAME  |
//! +-------------+-------+
//! | u1          | alice |
//! +-------------+-------+
//! ```
//!
//! Headers are centred, cells left-aligned. Control characters inside cells
//! are escaped so every row stays on one line. A table with no rows renders
//! as nothing.
//!
//! Widths count `char`s, not terminal columns: accented Latin text lines up,
//! but double-width CJK and emoji cells push the right border out.

use crate::config::DisplayConfig;
use crate::types::Table;
use std::borrow::Cow;
use std::fmt::Write;

#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    uppercase_headers: bool,
}

impl TableRenderer {
    pub fn new(uppercase_headers: bool) -> Self {
        Self { uppercase_headers }
    }

    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(display.uppercase_headers)
    }

    /// Render each table in order, one after another.
    pub fn render_all(&self, tables: &[Table]) -> String {
        tables.iter().map(|table| self.render(table)).collect()
    }

    pub fn render(&self, table: &Table) -> String {
        if table.is_empty() {
            return String::new();
        }

        let headers: Vec<String> = table
            .columns
            .iter()
            .map(|h| {
                if self.uppercase_headers {
                    h.to_uppercase()
                } else {
                    h.clone()
                }
            })
            .collect();
        let rows: Vec<Vec<Cow<'_, str>>> = table
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| escape_controls(cell)).collect())
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(width(cell));
            }
        }

        let border = border_line(&widths);
        let mut out = String::new();
        out.push_str(&border);

        out.push('|');
        for (header, w) in headers.iter().zip(&widths) {
            let pad = w - width(header);
            let left = pad / 2;
            let _ = write!(out, " {}{}{} |", " ".repeat(left), header, " ".repeat(pad - left));
        }
        out.push('\n');
        out.push_str(&border);

        for row in &rows {
            out.push('|');
            for (cell, w) in row.iter().zip(&widths) {
                let _ = write!(out, " {}{} |", cell, " ".repeat(w - width(cell)));
            }
            out.push('\n');
        }
        out.push_str(&border);
        out
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn escape_controls(cell: &str) -> Cow<'_, str> {
    if !cell.chars().any(char::is_control) {
        return Cow::Borrowed(cell);
    }
    Cow::Owned(
        cell.chars()
            .map(|c| {
                if c.is_control() {
                    c.escape_default().to_string()
                } else {
                    c.to_string()
                }
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
