//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: Snapshot `i` adds the mark of the player whose turn it was
/// at step `i - 1`, so X on odd steps and O on even steps.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let snapshots = game.history().snapshots();
        snapshots.windows(2).enumerate().all(|(i, pair)| {
            let expected = Square::Occupied(Player::for_parity(i));
            pair[0]
                .board()
                .diff(pair[1].board())
                .iter()
                .all(|pos| pair[1].get(*pos) == expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
