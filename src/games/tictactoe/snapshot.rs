//! Serializable read model of a game.

use super::action::Move;
use super::game::Game;
use super::phases::GamePhase;
use super::types::{Marker, CELL_COUNT};
use serde::{Deserialize, Serialize};

/// Everything a front-end needs to render a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order, `None` when empty.
    pub cells: [Option<Marker>; CELL_COUNT],
    /// Name of the player to move, once players are assigned.
    pub current_player: Option<String>,
    /// Lifecycle phase.
    pub phase: GamePhase,
    /// Status line for the user.
    pub status: String,
    /// Result once the game is over, empty before.
    pub result_message: String,
    /// Moves since the last reset.
    pub history: Vec<Move>,
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Self {
            cells: game.board().map(|cell| cell.marker()),
            current_player: game.current_player().map(|player| player.name().clone()),
            phase: game.phase(),
            status: game.status_text(),
            result_message: game.result_message().to_string(),
            history: game.history().to_vec(),
        }
    }
}
