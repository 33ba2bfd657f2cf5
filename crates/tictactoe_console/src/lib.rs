//! Console front end for `tictactoe_timeline`.
//!
//! Reads line commands (`play`, `jump`, `history`, ...), forwards them to a
//! [`GameSession`](tictactoe_timeline::GameSession) and prints the board,
//! status line and move list each time the session reports a change.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod command;
mod config;
mod render;

pub use app::{Console, Flow};
pub use cli::Cli;
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, ConsoleConfig};
