//! Game phases and outcomes.

use super::Marker;
use serde::{Deserialize, Serialize};

/// Where a game sits in its lifecycle.
///
/// `Setup` holds until players are assigned. `Over` is terminal and is
/// only left through a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
pub enum GamePhase {
    /// No players assigned yet.
    #[default]
    Setup,
    /// Moves are accepted.
    InProgress,
    /// Someone won or the board filled up.
    Over,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The marker completed a line.
    Winner(Marker),
    /// Board full, no line.
    Tie,
}

impl Outcome {
    /// Returns the winning marker if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Winner(marker) => Some(*marker),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}
