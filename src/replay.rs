//! Headless front-end: feeds a list of moves through the controller.

use crate::controller::GameController;
use crate::games::tictactoe::{Position, Snapshot};
use derive_more::{Display, Error};
use tracing::{info, instrument, warn};

/// A move list entry that is neither an index nor a position label.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid move {:?} at position {} (expected 0-8 or a label like \"center\")", token, ordinal)]
pub struct MoveParseError {
    /// The offending entry.
    pub token: String,
    /// 1-based position of the entry in the list.
    pub ordinal: usize,
}

/// Parses a comma-separated move list such as `0,4,top-right`.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<usize>, MoveParseError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            Position::parse(token)
                .map(Position::to_index)
                .ok_or_else(|| MoveParseError {
                    token: token.to_string(),
                    ordinal: i + 1,
                })
        })
        .collect()
}

/// Outcome of a replay.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// Final game state.
    pub snapshot: Snapshot,
    /// Board rendered as text.
    pub board: String,
    /// Moves that had no effect, by index.
    pub rejected: Vec<usize>,
}

/// Starts a game with the given names and plays `moves` in order.
///
/// Moves the engine ignores (occupied cell, game already over) are
/// collected in [`ReplayReport::rejected`].
#[instrument(skip(moves), fields(move_count = moves.len()))]
pub fn replay(name1: &str, name2: &str, moves: &[usize]) -> ReplayReport {
    let mut controller = GameController::new("replay".to_string());
    controller.start(name1, name2);

    let mut rejected = Vec::new();
    for &index in moves {
        if !controller.activate_cell(index) {
            warn!(index, status = %controller.status_text(), "Move ignored");
            rejected.push(index);
        }
    }

    info!(status = %controller.status_text(), rejected = rejected.len(), "Replay finished");
    ReplayReport {
        snapshot: controller.snapshot(),
        board: controller.board_text(),
        rejected,
    }
}
