//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot, kept apart from board storage so
//! the game engine and tests can evaluate any layout.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{has_won, winning_line, LINES};
