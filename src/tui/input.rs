//! Cursor movement for keyboard navigation.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Moves the cursor one cell for an arrow key; stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}

/// Board index for a digit key `1`-`9`.
pub fn digit_to_index(c: char) -> Option<usize> {
    match c.to_digit(10)? {
        digit @ 1..=9 => Some(digit as usize - 1),
        _ => None,
    }
}
