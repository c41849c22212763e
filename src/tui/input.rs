//! Keyboard mapping: keys become intents, arrows move the cursor.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

use super::app::{App, Direction, Focus, Intent};

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Translates a key press into an intent for the current focus.
pub fn intent_for_key(key: KeyCode, app: &App) -> Option<Intent> {
    let focus = app.view().focus;
    let direction = match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    };
    if let Some(direction) = direction {
        return Some(match focus {
            Focus::Board => Intent::MoveCursor(direction),
            Focus::History => Intent::MoveSelection(direction),
        });
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('s') => Some(Intent::ToggleSort),
        KeyCode::Char('r') => Some(Intent::Restart),
        KeyCode::Tab | KeyCode::BackTab => Some(Intent::ToggleFocus),
        // Keypad numbering: 1 is top-left.
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Intent::CellClicked),
        KeyCode::Enter | KeyCode::Char(' ') => Some(match focus {
            Focus::Board => Intent::CellClicked(app.view().cursor),
            Focus::History => Intent::HistoryClicked(app.view().selected_step),
        }),
        _ => None,
    }
}
