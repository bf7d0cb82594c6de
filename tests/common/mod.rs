//! Shared test utilities for kvlens integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Every database is written to its own temp directory and
//! removed when the returned [`TestDb`] is dropped.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
