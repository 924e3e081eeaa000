//! Tie detection logic for tic-tac-toe.

use super::super::{Cell, Marker, CELL_COUNT};
use super::win::has_won;

/// Checks if every cell is occupied.
pub fn is_full(cells: &[Cell; CELL_COUNT]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}

/// A full board where neither marker holds a line.
pub fn is_tie(cells: &[Cell; CELL_COUNT]) -> bool {
    is_full(cells) && !has_won(cells, Marker::X) && !has_won(cells, Marker::O)
}
