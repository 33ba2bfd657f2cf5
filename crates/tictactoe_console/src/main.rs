//! tictactoe - play tic-tac-toe in the terminal with a move-history browser.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufReader, IsTerminal};
use tictactoe_console::{Cli, Console, ConsoleConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)?,
        None => ConsoleConfig::default(),
    };
    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.clone());
    }

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(config = ?cli.config, script = ?cli.script, "Starting tic-tac-toe console");

    let mut console = Console::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.script {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            console.run(BufReader::new(file), &mut out, false)
        }
        None => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            console.run(stdin.lock(), &mut out, interactive)
        }
    }
}
