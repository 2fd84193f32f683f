//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tictactoe::{Audio, Cli, ShellConfig, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ShellConfig::load(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?
        .with_overrides(cli.no_audio, cli.log_file);

    init_tracing(config.log_file(), config.log_filter())?;
    info!(config = ?config, "Starting tic-tac-toe");

    let audio = Audio::probe(*config.audio());
    tui::run(audio)
}

/// Logs go to a file so they do not interfere with the TUI.
fn init_tracing(log_file: &Path, filter: &str) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Creating log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
