//! Translation of terminal events into presenter commands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tictoe_core::{CELLS_PER_AXIS, Position};

/// Direction for keyboard cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// An input the presenter knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Left button pressed at a terminal column/row.
    PointerDown {
        /// Terminal column.
        x: u16,
        /// Terminal row.
        y: u16,
    },
    /// Play directly at a cell (digit keys).
    Select(Position),
    /// Play at the cursor.
    SelectCursor,
    /// Move the cursor.
    MoveCursor(Direction),
    /// Start a fresh game.
    Restart,
    /// Dismiss the notification, or quit when none is showing.
    Cancel,
    /// Leave the application.
    Quit,
    /// Terminal geometry changed.
    Redraw,
}

/// Maps a terminal event to a command, if it means anything to the game.
pub fn translate(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Command::PointerDown { x: *column, y: *row }),
        Event::Resize(..) => Some(Command::Redraw),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::Select),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::SelectCursor),
        KeyCode::Esc => Some(Command::Cancel),
        KeyCode::Up => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Command::MoveCursor(Direction::Right)),
        _ => None,
    }
}

/// Moves the cursor one step, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let last = CELLS_PER_AXIS - 1;
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match direction {
        Direction::Up => (row.saturating_sub(1), column),
        Direction::Down => ((row + 1).min(last), column),
        Direction::Left => (row, column.saturating_sub(1)),
        Direction::Right => (row, (column + 1).min(last)),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}
