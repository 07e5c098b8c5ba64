//! Key bindings.

use tictactoe_timeline::{Action, Position};
use crossterm::event::KeyCode;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// The other panel.
    pub fn toggled(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the game.
    Quit,
    /// Send an action straight to the reducer.
    Dispatch(Action),
    /// Move focus to the other panel.
    SwitchFocus,
    /// Move the cursor of the focused panel.
    MoveCursor(KeyCode),
    /// Play the board cell or jump to the history row under the cursor.
    ActivateCursor,
}

/// Maps a key press to a command.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('n') => Some(Command::Dispatch(Action::Reset)),
        KeyCode::Char('s') => Some(Command::Dispatch(Action::ToggleReverse)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(|pos| Command::Dispatch(Action::Move(pos))),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::SwitchFocus),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::ActivateCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::MoveCursor(key))
        }
        _ => None,
    }
}

/// Moves the board cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, column)),
        KeyCode::Down => Some((row + 1, column)),
        KeyCode::Left => column.checked_sub(1).map(|column| (row, column)),
        KeyCode::Right => Some((row, column + 1)),
        _ => None,
    };
    target
        .and_then(|(row, column)| Position::from_row_column(row, column))
        .unwrap_or(cursor)
}

/// Moves the move list cursor, clamped to `len` rows.
pub fn move_row(row: usize, key: KeyCode, len: usize) -> usize {
    let last = len.saturating_sub(1);
    match key {
        KeyCode::Up => row.saturating_sub(1),
        KeyCode::Down => (row + 1).min(last),
        _ => row.min(last),
    }
}
