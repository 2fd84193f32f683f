//! Command-line interface for the tic-tac-toe shell.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal, with mouse and keyboard play
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with session scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Disable audio cues
    #[arg(long)]
    pub no_audio: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
