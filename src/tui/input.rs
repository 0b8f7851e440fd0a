//! Cursor movement for keyboard navigation.

use crate::games::gomoku::Position;
use crossterm::event::KeyCode;

/// Moves the cursor with arrow keys or `hjkl`, staying on a `side`×`side` board.
pub fn move_cursor(cursor: Position, key: KeyCode, side: usize) -> Position {
    let last = side.saturating_sub(1);
    let Position { row, col } = cursor;

    match key {
        KeyCode::Left | KeyCode::Char('h') => Position::new(row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Position::new(row, (col + 1).min(last)),
        KeyCode::Up | KeyCode::Char('k') => Position::new(row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => Position::new((row + 1).min(last), col),
        _ => cursor,
    }
}

/// Whether `key` is a cursor movement key.
pub fn is_cursor_key(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Char('h' | 'j' | 'k' | 'l')
    )
}
