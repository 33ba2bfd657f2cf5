//! First-class invariants for the game timeline.
//!
//! Invariants are logical properties of a [`GameState`](crate::GameState)
//! that must hold after every successful mutation. They are checked in
//! debug builds and can be tested independently.

pub mod alternating_turn;
pub mod cursor_in_bounds;
pub mod empty_origin;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use empty_origin::EmptyOriginInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or every violation otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        warn!(invariant = $inv::description(), "Invariant violated");
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    EmptyOriginInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    CursorInBoundsInvariant,
);

/// Asserts that all timeline invariants hold (panics on violation in debug builds).
pub(crate) fn debug_assert_invariants(state: &crate::GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = TimelineInvariants::check_all(state)
    {
        panic!("timeline invariants violated: {violations:?}");
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::forced_state;
    use super::*;
    use crate::{GameState, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new();
        assert!(TimelineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jump() {
        let mut game = GameState::new();
        for cell in [0, 4, 8] {
            game.apply_move(cell).expect("in range");
        }
        game.jump_to(1).expect("in range");
        assert!(TimelineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // O moves first, then overwrites its own cell.
        let game = forced_state(
            &[(Position::Center, Player::O), (Position::Center, Player::X)],
            2,
        );
        let violations = TimelineInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            <MonotonicBoardInvariant as Invariant<GameState>>::description()
        );
        assert_eq!(
            violations[1].description,
            <AlternatingTurnInvariant as Invariant<GameState>>::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (EmptyOriginInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
