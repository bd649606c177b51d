//! Command-line interface for tictactoe_replay.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal with move history and replay
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe_replay")]
#[command(about = "Tic-tac-toe in the terminal with move history and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,
}
