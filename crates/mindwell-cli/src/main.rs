//! MindWell CLI - an encrypted personal journal and mood tracker.
//!
//! Thin transport binding over `mindwell-core`: it resolves the store
//! location, opens it once, wires the services, and dispatches
//! commands. Secrets are prompted per call and never stored.

mod cli;
mod commands;
mod config;
mod output;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use mindwell_core::{ExportService, JournalService, MoodService, SqliteStore};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, JournalCommands, MoodCommands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Init { path } = &cli.command {
        return handle_init(path.as_deref());
    }

    let user = cli
        .user
        .clone()
        .ok_or_else(|| anyhow::anyhow!("No user id. Pass --user or set MINDWELL_USER."))?;

    let (store_path, busy_timeout) = resolve_store(&cli)?;
    if let Some(parent) = store_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Opened once here, closed when the process exits; the services
    // share the handle instead of reaching for a global.
    let store = Arc::new(SqliteStore::open_with_timeout(&store_path, busy_timeout)?);

    match &cli.command {
        Commands::Init { .. } => unreachable!("handled before store setup"),
        Commands::Journal(JournalCommands::Add(args)) => {
            let journal = JournalService::new(Arc::clone(&store));
            commands::journal::handle_add(&journal, &user, args)
        }
        Commands::Journal(JournalCommands::List(args)) => {
            let journal = JournalService::new(Arc::clone(&store));
            commands::journal::handle_list(&journal, &user, args)
        }
        Commands::Mood(MoodCommands::Add { mood }) => {
            let moods = MoodService::new(Arc::clone(&store));
            commands::mood::handle_add(&moods, &user, *mood)
        }
        Commands::Mood(MoodCommands::History(args)) => {
            let moods = MoodService::new(Arc::clone(&store));
            commands::mood::handle_history(&moods, &user, args)
        }
        Commands::Export => {
            let export = ExportService::new(Arc::clone(&store));
            commands::export::handle_export(&export, &user)
        }
    }
}

fn handle_init(path: Option<&str>) -> anyhow::Result<()> {
    let store_path = match path {
        Some(path) => PathBuf::from(path),
        None => config::default_store_path()?,
    };
    if let Some(parent) = store_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let store = SqliteStore::open(&store_path)?;
    store.close()?;

    let config_path = config::default_config_path()?;
    config::write_config(&config_path, &config::MindwellConfig::new(store_path.clone()))?;

    println!("Initialized store at {}", store_path.display());
    println!("Config written to {}", config_path.display());
    Ok(())
}

/// Store path and busy timeout: explicit flag first, then the config
/// file, then the XDG default.
fn resolve_store(cli: &Cli) -> anyhow::Result<(PathBuf, Duration)> {
    if let Some(ref store) = cli.store {
        return Ok((
            PathBuf::from(store),
            Duration::from_millis(5_000),
        ));
    }

    let config_path = config::default_config_path()?;
    if config_path.exists() {
        let loaded = config::read_config(&config_path)?;
        return Ok((
            PathBuf::from(loaded.store.path),
            Duration::from_millis(loaded.store.busy_timeout_ms),
        ));
    }

    Ok((config::default_store_path()?, Duration::from_millis(5_000)))
}
