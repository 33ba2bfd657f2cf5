//! Text rendering of a game state.

use tictactoe_timeline::{GameState, rules, view};
use tracing::instrument;

/// Board followed by the status line.
///
/// A won board also names its winning line, and a past step says that
/// playing from it discards the later moves.
#[instrument(skip(state))]
pub fn board(state: &GameState) -> String {
    let board = state.current().board();
    let mut lines = vec![board.display(), view::status_line(state)];
    if let Some((_, line)) = rules::winning_line(board) {
        let cells = line.map(|pos| pos.label()).join(", ");
        lines.push(format!("Winning line: {}", cells));
    }
    if state.is_viewing_past() {
        lines.push(format!(
            "Viewing step {} of {}; a move here discards the later steps",
            state.step_number(),
            state.history().len() - 1
        ));
    }
    lines.join("\n")
}

/// Numbered move list; the current step is marked with `>`.
#[instrument(skip(state))]
pub fn history(state: &GameState) -> String {
    view::move_list(state)
        .iter()
        .map(|entry| {
            let marker = if entry.current { '>' } else { ' ' };
            format!("{} {}. {}", marker, entry.step, entry.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
