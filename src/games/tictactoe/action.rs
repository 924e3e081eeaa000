//! Applied moves, recorded in game history.

use super::Marker;
use serde::{Deserialize, Serialize};

/// A marker placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Marker that was placed.
    pub marker: Marker,
    /// Board index (0-8).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.index)
    }
}
