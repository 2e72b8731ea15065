use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use invopad::cli;
use invopad::services::state::AppState;
use invopad::storage::LocalStore;

/// Local-first invoice entry pad.
#[derive(Parser, Debug)]
#[command(name = "invopad", version)]
struct Cli {
    /// Directory holding the local store. Falls back to $INVOPAD_DATA_DIR,
    /// then ~/.invopad.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level when RUST_LOG is not set (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();

    let data_dir = resolve_data_dir(args.data_dir);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Create data dir {}", data_dir.display()))?;

    let store = LocalStore::new(data_dir.join("invopad.sqlite"))
        .with_context(|| format!("Open store in {}", data_dir.display()))?;
    let mut state = AppState::new(store);

    cli::run(&mut state)
}

fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var("INVOPAD_DATA_DIR") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    match std::env::var("HOME") {
        Ok(home) if !home.trim().is_empty() => PathBuf::from(home).join(".invopad"),
        _ => PathBuf::from(".invopad"),
    }
}
