//! Test builders — write small redb files for the harnesses.
//!
//! These builders are designed for readability in test setup, not for
//! production use. They panic on any storage error rather than returning
//! `Result`.

use kvlens::Store;
use redb::{Database, TableDefinition};
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// DbBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a database file with named buckets.
///
/// # Example
///
/// ```rust
/// let db = DbBuilder::new()
///     .json("users", "u1", serde_json::json!({"name": "alice"}))
///     .bucket("empty")
///     .build();
/// let store = db.open();
/// ```
#[derive(Default)]
pub struct DbBuilder {
    buckets: Vec<(String, Vec<(Vec<u8>, Vec<u8>)>)>,
}

impl DbBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `name` exists, even if nothing is ever stored in it.
    pub fn bucket(mut self, name: &str) -> Self {
        self.entries_mut(name);
        self
    }

    pub fn json(self, bucket: &str, key: &str, value: serde_json::Value) -> Self {
        let bytes = serde_json::to_vec(&value).unwrap();
        self.raw(bucket, key.as_bytes(), &bytes)
    }

    pub fn raw(mut self, bucket: &str, key: &[u8], value: &[u8]) -> Self {
        self.entries_mut(bucket).push((key.to_vec(), value.to_vec()));
        self
    }

    pub fn build(self) -> TestDb {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.redb");
        let db = Database::create(&path).unwrap();
        let txn = db.begin_write().unwrap();
        for (name, entries) in &self.buckets {
            let definition: TableDefinition<&'static [u8], &'static [u8]> =
                TableDefinition::new(name);
            let mut table = txn.open_table(definition).unwrap();
            for (key, value) in entries {
                table.insert(key.as_slice(), value.as_slice()).unwrap();
            }
        }
        txn.commit().unwrap();
        TestDb { _dir: dir, path }
    }

    fn entries_mut(&mut self, bucket: &str) -> &mut Vec<(Vec<u8>, Vec<u8>)> {
        let idx = match self.buckets.iter().position(|(name, _)| name == bucket) {
            Some(idx) => idx,
            None => {
                self.buckets.push((bucket.to_string(), Vec::new()));
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[idx].1
    }
}

// ---------------------------------------------------------------------------
// TestDb
// ---------------------------------------------------------------------------

/// A database file that lives as long as this value.
pub struct TestDb {
    _dir: tempfile::TempDir,
    pub path: PathBuf,
}

impl TestDb {
    pub fn open(&self) -> Store {
        Store::open(&self.path).unwrap()
    }
}
