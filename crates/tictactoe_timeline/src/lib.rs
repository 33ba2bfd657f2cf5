//! Tic-tac-toe game core with a time-travel move history.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] owns every [`Snapshot`] played so far and a
//!   step cursor. Turn order follows from the cursor's parity.
//! - **Rules**: [`rules::evaluate`] checks the 8 winning lines; draw
//!   detection lives beside it.
//! - **Invariants**: [`invariants`] expresses timeline guarantees as
//!   independently testable checks, asserted in debug builds.
//! - **Session**: [`GameSession`] notifies [`GameObserver`]s after every
//!   successful change so a view layer can redraw.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, Player, view};
//!
//! let mut game = GameState::new();
//! game.apply_move(0)?;
//! game.apply_move(4)?;
//! assert_eq!(game.to_move(), Player::X);
//!
//! game.jump_to(0)?;
//! game.apply_move(2)?;
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(view::status_line(&game), "Next player: O");
//! # Ok::<(), tictactoe_timeline::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod history;
pub mod invariants;
mod observer;
mod position;
pub mod rules;
mod session;
mod types;
pub mod view;

pub use action::{IgnoredMove, Move, MoveOutcome};
pub use error::{GameError, GameErrorKind, GameResult};
pub use game::{GameState, GameStatus};
pub use history::{History, Snapshot};
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, EmptyOriginInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant, TimelineInvariants,
};
pub use observer::{GameEvent, GameObserver};
pub use position::Position;
pub use session::GameSession;
pub use types::{Board, Player, Square};
