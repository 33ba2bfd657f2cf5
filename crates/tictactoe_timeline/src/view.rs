//! Text the presentation layer shows: the status line and the move list.

use super::{GameState, GameStatus};
use serde::Serialize;
use tracing::instrument;

/// Descriptor for a history entry: `"Go to game start"` for step 0,
/// `"Go to Move #N"` otherwise.
#[instrument]
pub fn move_descriptor(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to Move #{}", step)
    }
}

/// Status line for the current step.
///
/// `"Winner: <mark>"`, `"Draw"` for a full board without a winner, or
/// `"Next player: <mark>"`.
#[instrument(skip(state))]
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(player) => format!("Winner: {}", player),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress => format!("Next player: {}", state.to_move()),
    }
}

/// One selectable entry of the history browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// True for the step currently shown.
    pub current: bool,
}

/// Entries for every recorded step, oldest first.
#[instrument(skip(state))]
pub fn move_list(state: &GameState) -> Vec<MoveEntry> {
    (0..state.history().len())
        .map(|step| MoveEntry {
            step,
            label: move_descriptor(step),
            current: step == state.step_number(),
        })
        .collect()
}
