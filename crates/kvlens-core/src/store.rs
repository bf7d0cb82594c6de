//! Store — read-only access to a redb database file.
//!
//! Every read happens inside [`Store::view`], which holds a read transaction
//! for the duration of a closure and releases it on return. Containers are
//! redb tables keyed and valued by raw bytes.

use crate::error::{OpenError, QueryError};
use crate::types::Record;
use redb::{Database, ReadTransaction, ReadableTable, TableDefinition, TableHandle};
use std::path::{Path, PathBuf};

type Container<'a> = TableDefinition<'a, &'static [u8], &'static [u8]>;

/// An open database. Held for the lifetime of the session; closed on drop.
#[derive(Debug)]
pub struct Store {
    db: Database,
    path: PathBuf,
}

impl Store {
    /// Open an existing database file. The file is never created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, OpenError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpenError::NotFound(path.to_path_buf()));
        }

        let db = Database::open(path).map_err(|source| OpenError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "store opened");

        Ok(Self {
            db,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `read` inside a read-only transaction.
    pub fn view<T>(
        &self,
        read: impl FnOnce(&ReadTransaction) -> Result<T, QueryError>,
    ) -> Result<T, QueryError> {
        let txn = self.db.begin_read()?;
        read(&txn)
    }

    /// Names of all containers, in the order the store lists them.
    pub fn container_names(&self) -> Result<Vec<String>, QueryError> {
        self.view(|txn| {
            Ok(txn
                .list_tables()?
                .map(|handle| handle.name().to_string())
                .collect())
        })
    }

    /// Every record in `container` whose key starts with `prefix`, in
    /// ascending key order. An empty prefix returns the whole container.
    pub fn scan(&self, container: &str, prefix: &[u8]) -> Result<Vec<Record>, QueryError> {
        self.view(|txn| {
            let name = txn
                .list_tables()?
                .map(|handle| handle.name().to_string())
                .find(|name| name == container)
                .ok_or_else(|| QueryError::ContainerNotFound(container.to_string()))?;

            let definition: Container<'_> = TableDefinition::new(&name);
            let table = txn.open_table(definition)?;

            let mut records = Vec::new();
            for entry in table.range::<&[u8]>(prefix..)? {
                let (key, value) = entry?;
                let key = key.value();
                if !key.starts_with(prefix) {
                    break;
                }
                records.push(Record::decode(key.to_vec(), value.value()));
            }

            tracing::debug!(
                container,
                prefix = %String::from_utf8_lossy(prefix),
                records = records.len(),
                "prefix scan complete"
            );
            Ok(records)
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
