//! Error types for opening the store and running queries against it.

use std::path::PathBuf;

/// Failure to start a session. Fatal: the command loop never runs.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("Database not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: redb::DatabaseError,
    },
}

/// Per-command failure. Reported to the user; the session keeps running.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("bucket not found: {0}")]
    ContainerNotFound(String),
    #[error("no bucket selected, run use=<name> first")]
    NoContainerSelected,
    #[error("storage error: {0}")]
    Storage(#[from] redb::Error),
}

impl From<redb::StorageError> for QueryError {
    fn from(err: redb::StorageError) -> Self {
        QueryError::Storage(err.into())
    }
}

impl From<redb::TableError> for QueryError {
    fn from(err: redb::TableError) -> Self {
        QueryError::Storage(err.into())
    }
}

impl From<redb::TransactionError> for QueryError {
    fn from(err: redb::TransactionError) -> Self {
        QueryError::Storage(err.into())
    }
}
