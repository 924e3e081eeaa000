//! Named board positions.
//!
//! The engine addresses cells by raw index; `Position` is the typed view
//! used by the front-ends for cursor movement and by the move parser.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Index 0.
    TopLeft,
    /// Index 1.
    TopCenter,
    /// Index 2.
    TopRight,
    /// Index 3.
    MiddleLeft,
    /// Index 4.
    #[default]
    Center,
    /// Index 5.
    MiddleRight,
    /// Index 6.
    BottomLeft,
    /// Index 7.
    BottomCenter,
    /// Index 8.
    BottomRight,
}

impl Position {
    /// Label used in the UI and accepted by [`Position::parse`].
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Position for a board index, `None` outside `0..9`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Position at `row`/`col`, `None` off the grid.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Parses a board index (`0`-`8`) or a label, case-insensitive.
    #[instrument]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }
        Self::iter().find(|pos| pos.label().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
