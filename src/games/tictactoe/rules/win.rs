//! Win detection logic for tic-tac-toe.

use super::super::{Cell, Marker, CELL_COUNT};
use tracing::instrument;

/// The 8 index triples that win when held by one marker.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line fully held by `marker`, if any.
#[instrument(skip(cells))]
pub fn winning_line(cells: &[Cell; CELL_COUNT], marker: Marker) -> Option<[usize; 3]> {
    LINES
        .into_iter()
        .find(|line| line.iter().all(|&index| cells[index] == Cell::Marked(marker)))
}

/// Checks whether `marker` holds a complete line.
pub fn has_won(cells: &[Cell; CELL_COUNT], marker: Marker) -> bool {
    winning_line(cells, marker).is_some()
}
