//! Cursor invariant: the step number always selects a recorded snapshot.

use super::Invariant;
use crate::GameState;

/// Invariant: `0 <= step_number < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.step_number() < game.history().len()
    }

    fn description() -> &'static str {
        "Step number selects a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::History;

    #[test]
    fn test_new_game_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let game = GameState::from_parts(History::new(), 1);
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
