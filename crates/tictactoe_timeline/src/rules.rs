//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from
//! board storage and history so they can be reused by the game state,
//! the invariants and the presentation layer alike.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, evaluate, winning_line};
