mod action;
mod game;
mod invariants;
mod phases;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::Move;
pub use game::{Game, SETUP_MESSAGE, TIE_MESSAGE};
pub use invariants::{check_all as check_invariants, InvariantViolation};
pub use phases::{GamePhase, Outcome};
pub use position::Position;
pub use snapshot::Snapshot;
pub use types::{Board, Cell, Marker, Player, CELL_COUNT};
