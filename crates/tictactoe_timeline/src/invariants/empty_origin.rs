//! Empty origin invariant: the first snapshot is the empty board.

use super::Invariant;
use crate::{GameState, Snapshot};

/// Invariant: History[0] is always the all-empty board.
pub struct EmptyOriginInvariant;

impl Invariant<GameState> for EmptyOriginInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().get(0) == Some(&Snapshot::empty())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{History, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(EmptyOriginInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_marked_origin_violates() {
        let origin = Snapshot::empty().with_mark(Position::Center, Player::X);
        let game = GameState::from_parts(History::from_snapshots(vec![origin]), 0);
        assert!(!EmptyOriginInvariant::holds(&game));
    }
}
