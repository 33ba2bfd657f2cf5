//! Error types for the timeline game core.
//!
//! Illegal moves are not errors: they come back as
//! [`MoveOutcome::Ignored`](crate::MoveOutcome::Ignored). Errors are reserved
//! for caller contract violations such as an out-of-range cell or step.

use derive_more::{Display, Error};
use tracing::instrument;

/// Specific error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Cell index outside `0..=8`.
    #[display("cell index {} is out of bounds (must be 0-8)", index)]
    InvalidIndex {
        /// The rejected index.
        index: usize,
    },

    /// History step outside `0..len`.
    #[display("step {} is out of range (history has {} snapshots)", step, len)]
    InvalidStep {
        /// The rejected step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> GameErrorKind {
        self.kind
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Convenience alias for results carrying a [`GameError`].
pub type GameResult<T> = std::result::Result<T, GameError>;
