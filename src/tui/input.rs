//! Keyboard mapping for cell selection.

use crossterm::event::KeyCode;
use noughts_and_crosses::Position;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps digit keys 1-9 to cell indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Some(digit as usize - 1),
            _ => None,
        },
        _ => None,
    }
}
