//! Command-line interface for the tic-tac-toe console.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with a move-history browser, played from the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML console configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is not set (overrides the config file)
    #[arg(long)]
    pub log_filter: Option<String>,
}
