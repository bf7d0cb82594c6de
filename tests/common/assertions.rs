//! Table assertions for kvlens harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! table invariant was violated.

use kvlens::Table;

/// Assert the primary-key column of `table`, top to bottom.
pub fn assert_keys(table: &Table, expected: &[&str]) {
    let actual = table
        .column("primary key")
        .unwrap_or_else(|| panic!("table has no primary key column: {:?}", table.columns));
    pretty_assertions::assert_eq!(actual, expected.to_vec(), "primary keys differ");
}

/// Assert that rows appear in ascending primary-key order.
pub fn assert_rows_ascending(table: &Table) {
    let keys = table.column("primary key").unwrap_or_default();
    for pair in keys.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "rows out of order: {:?} before {:?}\n  all keys: {:?}",
            pair[0],
            pair[1],
            keys
        );
    }
}

/// Assert the cell at (`key`, `column`).
pub fn assert_cell(table: &Table, key: &str, column: &str, expected: &str) {
    let col = table
        .columns
        .iter()
        .position(|c| c == column)
        .unwrap_or_else(|| panic!("no column {column:?} in {:?}", table.columns));
    let row = table
        .rows
        .iter()
        .find(|row| row[0] == key)
        .unwrap_or_else(|| panic!("no row {key:?} in table with columns {:?}", table.columns));
    pretty_assertions::assert_eq!(row[col], expected, "cell ({key:?}, {column:?})");
}
