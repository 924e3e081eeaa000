//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Symbol a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Player 1's marker (moves first).
    X,
    /// Player 2's marker.
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds a player's marker.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }

    /// Checks whether the cell is free.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A participant: display name plus marker. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Player {
    /// Name shown in status messages.
    #[new(into)]
    name: String,
    /// Marker this player places.
    #[getter(copy)]
    marker: Marker,
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all nine cells.
    ///
    /// The array is `Copy`, so callers can mutate their snapshot freely
    /// without touching the board.
    pub fn state(&self) -> [Cell; CELL_COUNT] {
        self.cells
    }

    /// Returns the cell at `index`, or `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Places `marker` at `index` if the cell exists and is empty.
    ///
    /// Returns `false` and leaves the board untouched for an occupied cell
    /// or an index outside `0..9`.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Marked(marker);
                true
            }
            _ => false,
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(&self.cells)
    }

    /// Iterates over the indices of free cells.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_accepts_exactly_one_marker() {
        for index in 0..CELL_COUNT {
            let mut board = Board::new();
            assert!(board.set_cell(index, Marker::X));
            assert!(!board.set_cell(index, Marker::O));
            assert_eq!(board.cell(index), Some(Cell::Marked(Marker::X)));
        }
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let mut board = Board::new();
        assert!(!board.set_cell(9, Marker::X));
        assert!(!board.set_cell(usize::MAX, Marker::O));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_state_is_a_copy() {
        let mut board = Board::new();
        board.set_cell(4, Marker::O);

        let mut snapshot = board.state();
        snapshot[0] = Cell::Marked(Marker::X);
        snapshot[4] = Cell::Empty;

        assert_eq!(board.cell(0), Some(Cell::Empty));
        assert_eq!(board.cell(4), Some(Cell::Marked(Marker::O)));
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        for index in [0, 3, 8] {
            board.set_cell(index, Marker::X);
        }
        board.reset();
        assert_eq!(board.state(), [Cell::Empty; CELL_COUNT]);
    }

    #[test]
    fn test_empty_cells_and_full() {
        let mut board = Board::new();
        board.set_cell(1, Marker::X);
        board.set_cell(7, Marker::O);
        let free: Vec<_> = board.empty_cells().collect();
        assert_eq!(free, vec![0, 2, 3, 4, 5, 6, 8]);
        assert!(!board.is_full());

        for index in free {
            board.set_cell(index, Marker::X);
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_display_shows_keys_for_free_cells() {
        let mut board = Board::new();
        board.set_cell(0, Marker::X);
        board.set_cell(4, Marker::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_marker_opponent() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
    }
}
