//! Session state and the line-oriented command loop.
//!
//! [`App::run`] prompts, reads one line, executes it, and repeats until the
//! input ends, `quit` is entered, the input stream fails, or the cancellation
//! token fires. Commands run strictly one at a time.

use crate::commands::Command;
use kvlens_core::{
    config::Config,
    query,
    render::TableRenderer,
    QueryError, Store,
};
use std::io::{self, BufRead, Write};
use tokio_util::sync::CancellationToken;

// ---------------------------------------------------------------------------
// Session types
// ---------------------------------------------------------------------------

/// Why the command loop stopped.
#[derive(Debug)]
pub enum SessionEnd {
    /// `quit` was entered.
    Quit,
    /// The input stream reached end-of-file.
    EndOfInput,
    /// Reading the input stream failed; not retried.
    InputError(io::Error),
    /// The cancellation token fired between commands.
    Cancelled,
}

/// Mutable per-session state.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Bucket used by bare `key=` queries.
    pub selected: Option<String>,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App<'s> {
    store: &'s Store,
    config: Config,
    renderer: TableRenderer,
    state: SessionState,
}

impl<'s> App<'s> {
    pub fn new(store: &'s Store, config: Config) -> Self {
        let renderer = TableRenderer::from_config(&config.display);
        App {
            store,
            config,
            renderer,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Drive the command loop over `input`, writing everything to `out`.
    ///
    /// Only a failure to write `out` is returned as an error; every other
    /// way the loop can stop is a [`SessionEnd`].
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        cancel: &CancellationToken,
    ) -> anyhow::Result<SessionEnd> {
        let mut buf = Vec::new();
        loop {
            if cancel.is_cancelled() {
                tracing::debug!("session cancelled");
                return Ok(SessionEnd::Cancelled);
            }

            write!(out, "{}", self.config.shell.prompt)?;
            out.flush()?;

            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    tracing::debug!("end of input");
                    return Ok(SessionEnd::EndOfInput);
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "input stream failed");
                    return Ok(SessionEnd::InputError(err));
                }
            }

            let line = String::from_utf8_lossy(&buf);
            self.handle_line(&line, out)?;

            if self.state.quit {
                return Ok(SessionEnd::Quit);
            }
        }
    }

    /// Parse and execute a single input line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<()> {
        match Command::parse(line, self.config.shell.grammar) {
            Ok(cmd) => {
                tracing::debug!(command = ?cmd, "executing command");
                if let Err(err) = self.execute_command(cmd, out)? {
                    tracing::debug!(error = %err, "command failed");
                    writeln!(out, "{err}")?;
                }
            }
            // Blank line: prompt again
            Err(msg) if msg.is_empty() => {}
            Err(msg) => writeln!(out, "{msg}")?,
        }
        Ok(())
    }

    /// Execute a parsed [`Command`]. The outer `Result` carries output-stream
    /// failures, the inner one a per-command error to report.
    fn execute_command<W: Write>(
        &mut self,
        cmd: Command,
        out: &mut W,
    ) -> anyhow::Result<Result<(), QueryError>> {
        match cmd {
            Command::ShowBuckets => {
                let names = match self.store.container_names() {
                    Ok(names) => names,
                    Err(err) => return Ok(Err(err)),
                };
                for name in names {
                    writeln!(out, "{name}")?;
                }
            }
            Command::Use(bucket) => {
                tracing::debug!(bucket = ?bucket, "bucket selected");
                self.state.selected = bucket;
            }
            Command::Key(prefix) => {
                let Some(bucket) = self.state.selected.clone() else {
                    return Ok(Err(QueryError::NoContainerSelected));
                };
                return self.find(&bucket, &prefix, out);
            }
            Command::Query { bucket, prefix } => {
                return self.find(&bucket, &prefix, out);
            }
            Command::Quit => {
                self.state.quit = true;
            }
        }
        Ok(Ok(()))
    }

    fn find<W: Write>(
        &self,
        bucket: &str,
        prefix: &str,
        out: &mut W,
    ) -> anyhow::Result<Result<(), QueryError>> {
        let tables = match query::find(self.store, bucket, prefix, &self.config.display) {
            Ok(tables) => tables,
            Err(err) => return Ok(Err(err)),
        };
        out.write_all(self.renderer.render_all(&tables).as_bytes())?;
        Ok(Ok(()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
