//! kvlens shell — the line-oriented command loop.

pub mod app;
pub mod commands;

pub use app::{App, SessionEnd, SessionState};
pub use commands::Command;
