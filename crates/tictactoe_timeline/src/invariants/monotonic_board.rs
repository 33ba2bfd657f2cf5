//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: Each snapshot differs from its predecessor in exactly one
/// square, and that square was empty before.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().snapshots().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            match before.diff(after).as_slice() {
                [pos] => before.get(*pos) == Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (one new mark per snapshot, never overwritten)"
    }
}
