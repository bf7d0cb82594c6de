//! kvlens — interactive browser for redb key-value files
//!
//! Opens a database read-only, reads commands from stdin and prints the
//! matching records as bordered tables. This crate re-exports the workspace
//! layers so integration tests and benches can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! stdin ──► Shell ──► Query ──► Flatten ──► Render ──► stdout
//!                       │
//!                     Store (read view)
//! ```
//!
//! The shell runs on a single blocking worker; `main` waits for it to finish.

pub use kvlens_core::{config, error, flatten, query, render, store, types};
pub use kvlens_core::{OpenError, QueryError, Record, Row, Store, Table};
pub use kvlens_shell::{app, commands, App, Command, SessionEnd};
