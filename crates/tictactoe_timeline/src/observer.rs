//! Change notification for game state consumers.
//!
//! A view layer registers a [`GameObserver`] with a
//! [`GameSession`](crate::GameSession) and redraws from the state it is
//! handed. Observers are called only after a mutation succeeded; ignored
//! moves and rejected requests are silent.

use super::{GameState, Move};
use serde::Serialize;

/// What changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A move was appended to the history.
    MoveApplied(Move),
    /// The cursor moved to a recorded step.
    Jumped {
        /// The new step number.
        step: usize,
    },
    /// The game returned to the empty board.
    Reset,
}

/// Observer of successful game state changes.
///
/// # Examples
///
/// ```
/// use tictactoe_timeline::{GameEvent, GameObserver, GameState};
///
/// struct Redraws(usize);
///
/// impl GameObserver for Redraws {
///     fn on_change(&mut self, _event: &GameEvent, _state: &GameState) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait GameObserver {
    /// Called once after every successful mutation.
    fn on_change(&mut self, event: &GameEvent, state: &GameState);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent, &GameState),
{
    fn on_change(&mut self, event: &GameEvent, state: &GameState) {
        self(event, state)
    }
}
