use clap::Parser;
use kvlens::config::{Config, Grammar, NestedMode, ScalarStyle};
use kvlens::{App, Store};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "kvlens", about = "kvlens — browse a redb key-value file from the command line")]
struct Cli {
    /// Path to the database file. It is opened read-only and never created.
    #[arg(short, long, value_name = "PATH")]
    database: PathBuf,

    /// Config file to use instead of ~/.config/kvlens/config.toml.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Command grammar: `full` adds use=/key= to the basic commands.
    #[arg(long, value_enum)]
    grammar: Option<Grammar>,

    /// Unroll arrays and objects into extra tables, or keep one flat table.
    #[arg(long, value_enum)]
    nested: Option<NestedMode>,

    /// How numbers, booleans and nulls are shown.
    #[arg(long, value_enum)]
    scalars: Option<ScalarStyle>,

    /// Write debug logs to <tmp>/kvlens-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let log_path = std::env::temp_dir().join("kvlens-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("kvlens debug log started, tail -f {}", log_path.display());
    }

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load(Some(path))?,
        None => Config::load(None).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config unreadable, using defaults");
            Config::defaults()
        }),
    };
    if let Some(grammar) = cli.grammar {
        config.shell.grammar = grammar;
    }
    if let Some(nested) = cli.nested {
        config.display.nested = nested;
    }
    if let Some(scalars) = cli.scalars {
        config.display.scalars = scalars;
    }

    let store = match Store::open(&cli.database) {
        Ok(store) => store,
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    };

    let exit_message = config.shell.exit_message.clone();
    let cancel = CancellationToken::new();
    let worker = {
        let cancel = cancel.clone();
        tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            App::new(&store, config).run(stdin.lock(), &mut stdout, &cancel)
        })
    };

    tokio::select! {
        joined = worker => {
            let end = joined??;
            tracing::debug!(end = ?end, "session finished");
            println!("{exit_message}");
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            cancel.cancel();
            tracing::debug!("interrupted");
            println!();
            println!("{exit_message}");
            // The worker may be parked in a blocking stdin read; don't wait for it.
            std::process::exit(130);
        }
    }
}
