//! First-class action types for tic-tac-toe.
//!
//! A move is a domain event: the player, the cell, and the history step it
//! produced. Moves that the rules reject are reported as [`IgnoredMove`]
//! rather than as errors.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
    /// History index of the snapshot this move produced (always >= 1).
    pub step: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position, step: usize) -> Self {
        Self {
            player,
            position,
            step,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {}", self.step, self.player, self.position.label())
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoredMove {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current snapshot already has a winner.
    #[display("Game is already over ({} won)", _0)]
    GameOver(Player),
}

/// Result of a legal-range move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded as a new snapshot.
    Applied(Move),
    /// The move was rejected by the rules; state is unchanged.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// True if the move changed the game state.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    /// The applied move, if any.
    pub fn applied(&self) -> Option<Move> {
        match self {
            MoveOutcome::Applied(mov) => Some(*mov),
            MoveOutcome::Ignored(_) => None,
        }
    }
}
