//! Terminal shell for two-player tic-tac-toe.
//!
//! The rules live in [`tictactoe_core`]. This crate turns terminal input into
//! engine commands and renders the results.
//!
//! # Architecture
//!
//! - **Geometry**: maps mouse positions to board cells
//! - **Audio**: cues for moves, wins and draws, behind an availability flag
//! - **TUI**: event loop, application state and rendering
//! - **Config**: CLI flags and an optional TOML file

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod geometry;
pub mod tui;

pub use audio::{Audio, AudioSink, Cue, Silent, TerminalBell};
pub use cli::Cli;
pub use config::{ConfigError, ShellConfig};
pub use geometry::BoardGeometry;
pub use tui::app::{App, RoundSummary};
