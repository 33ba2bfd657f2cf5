//! Parsing of console command lines.

use derive_more::{Display, Error};
use std::str::FromStr;
use tictactoe_timeline::Position;

/// A single console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Activate a cell.
    Play(Position),
    /// Jump to a recorded history step.
    Jump(usize),
    /// Print the board and status.
    Board,
    /// Print the move list.
    History,
    /// Print the game state as JSON.
    Json,
    /// Start a new game.
    Restart,
    /// Print the command summary.
    Help,
    /// Leave the console.
    Quit,
}

/// Why a command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Blank line.
    #[display("empty command")]
    Empty,
    /// First word is not a known command.
    #[display("unknown command '{}' (try 'help')", _0)]
    Unknown(#[error(not(source))] String),
    /// Command needs an argument.
    #[display("'{}' needs an argument", _0)]
    MissingArgument(#[error(not(source))] &'static str),
    /// Argument could not be read as a cell.
    #[display("'{}' is not a cell (use 0-8 or a label like 'center')", _0)]
    InvalidCell(#[error(not(source))] String),
    /// Argument could not be read as a step number.
    #[display("'{}' is not a step number", _0)]
    InvalidStep(#[error(not(source))] String),
}

/// Text shown by the `help` command.
pub const HELP: &str = "\
commands:
  play <cell>   place a mark (cell 0-8 or a label like 'center', 'top-left')
  jump <step>   show the board as it was after move <step> (0 = game start)
  board         print the current board and status
  history       print the move list
  json          print the game state as JSON
  restart       start a new game
  help          print this help
  quit          leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };
        let rest = words.collect::<Vec<_>>().join(" ");

        match verb.to_lowercase().as_str() {
            "play" | "p" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("play"));
                }
                Position::from_label_or_number(&rest)
                    .map(Command::Play)
                    .ok_or(CommandError::InvalidCell(rest))
            }
            "jump" | "j" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("jump"));
                }
                rest.parse()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::InvalidStep(rest))
            }
            "board" | "b" => Ok(Command::Board),
            "history" | "h" => Ok(Command::History),
            "json" => Ok(Command::Json),
            "restart" | "new" => Ok(Command::Restart),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_by_number_and_label() {
        assert_eq!("play 4".parse(), Ok(Command::Play(Position::Center)));
        assert_eq!("p 0".parse(), Ok(Command::Play(Position::TopLeft)));
        assert_eq!(
            "play bottom right".parse(),
            Ok(Command::Play(Position::BottomRight))
        );
        assert_eq!("PLAY top-left".parse(), Ok(Command::Play(Position::TopLeft)));
    }

    #[test]
    fn test_play_errors() {
        assert_eq!(
            "play".parse::<Command>(),
            Err(CommandError::MissingArgument("play"))
        );
        assert_eq!(
            "play 9".parse::<Command>(),
            Err(CommandError::InvalidCell("9".to_string()))
        );
    }

    #[test]
    fn test_jump() {
        assert_eq!("jump 0".parse(), Ok(Command::Jump(0)));
        assert_eq!("j 12".parse(), Ok(Command::Jump(12)));
        assert_eq!(
            "jump back".parse::<Command>(),
            Err(CommandError::InvalidStep("back".to_string()))
        );
    }

    #[test]
    fn test_simple_verbs() {
        assert_eq!("board".parse(), Ok(Command::Board));
        assert_eq!("history".parse(), Ok(Command::History));
        assert_eq!("json".parse(), Ok(Command::Json));
        assert_eq!("new".parse(), Ok(Command::Restart));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("  quit  ".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "undo".parse::<Command>(),
            Err(CommandError::Unknown("undo".to_string()))
        );
    }
}
