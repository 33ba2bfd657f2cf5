//! Game state with a time-travel history.
//!
//! The state owns every snapshot recorded so far and a cursor (the step
//! number) selecting which one is current. Jumping moves the cursor and
//! nothing else. Playing a move from a past step discards the snapshots
//! after it before appending the new one.

use super::action::{IgnoredMove, Move, MoveOutcome};
use super::error::{GameError, GameErrorKind, GameResult};
use super::history::{History, Snapshot};
use super::invariants::debug_assert_invariants;
use super::{Player, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game at the selected step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Authoritative game state: snapshot history plus the viewing cursor.
///
/// Whose turn it is follows from the parity of the step number and is
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    step_number: usize,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step_number: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: History, step_number: usize) -> Self {
        Self {
            history,
            step_number,
        }
    }

    /// Returns the recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the index of the current snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns the snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        &self.history.snapshots()[self.step_number]
    }

    /// Returns the player to move at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_parity(self.step_number)
    }

    /// Returns the winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::evaluate(self.current().board())
    }

    /// Returns the status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        let board = self.current().board();
        if let Some(winner) = rules::evaluate(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// True when the cursor is behind the latest recorded snapshot.
    pub fn is_viewing_past(&self) -> bool {
        self.step_number + 1 < self.history.len()
    }

    /// Positions that would be accepted by [`apply_move`](Self::apply_move).
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current().board())
    }

    /// Places the current player's mark at `cell_index` (0-8).
    ///
    /// A move on an occupied square, or after the current snapshot already
    /// has a winner, is ignored and leaves the state untouched. An accepted
    /// move first discards any snapshots after the current step, then
    /// appends the new snapshot and moves the cursor onto it.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidIndex`] if `cell_index` is not 0-8.
    #[instrument(skip(self), fields(step = self.step_number, to_move = %self.to_move()))]
    pub fn apply_move(&mut self, cell_index: usize) -> GameResult<MoveOutcome> {
        let Some(position) = Position::from_index(cell_index) else {
            return Err(GameError::new(GameErrorKind::InvalidIndex { index: cell_index }));
        };

        let current = *self.current();
        if let Some(winner) = rules::evaluate(current.board()) {
            debug!(%winner, "Ignoring move on a won board");
            return Ok(MoveOutcome::Ignored(IgnoredMove::GameOver(winner)));
        }
        if !current.board().is_empty(position) {
            debug!(%position, "Ignoring move on an occupied square");
            return Ok(MoveOutcome::Ignored(IgnoredMove::SquareOccupied(position)));
        }

        let player = self.to_move();
        self.history.truncate_after(self.step_number);
        let step = self.history.push(current.with_mark(position, player));
        self.step_number = step;
        debug_assert_invariants(self);

        let mov = Move::new(player, position, step);
        info!(%mov, "Move applied");
        Ok(MoveOutcome::Applied(mov))
    }

    /// Moves the cursor to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidStep`] if `step` is not a recorded index.
    #[instrument(skip(self), fields(from = self.step_number, len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> GameResult<()> {
        if step >= self.history.len() {
            return Err(GameError::new(GameErrorKind::InvalidStep {
                step,
                len: self.history.len(),
            }));
        }
        self.step_number = step;
        debug!(to_move = %self.to_move(), "Jumped");
        Ok(())
    }

    /// Returns to the empty board, discarding all history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
