//! kvlens-core — store access and table building for kvlens.
//!
//! This crate owns everything below the command loop: opening the database,
//! prefix scans inside read-only views, flattening nested JSON values into
//! tables, and rendering those tables as bordered text.
//!
//! # Architecture
//!
//! ```text
//! Store ──► Query ──► Flatten ──► Render
//!   │                    │
//!   └─ read view         └─ FIFO queue of deferred tables
//! ```
//!
//! Nothing in this crate writes to the database.

pub mod config;
pub mod error;
pub mod flatten;
pub mod query;
pub mod render;
pub mod store;
pub mod types;

pub use error::{OpenError, QueryError};
pub use store::Store;
pub use types::{Record, Row, Table};
