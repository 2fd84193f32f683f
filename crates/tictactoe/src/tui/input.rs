//! Keyboard commands and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe_core::{BOARD_DIM, Coord};

/// What a key press asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the application.
    Quit,
    /// Start a new round.
    NewGame,
    /// Place at the cursor, or start a new round once the current one is over.
    Confirm,
    /// Place directly on a cell.
    Place(Coord),
    /// Move the keyboard cursor.
    MoveCursor(Direction),
}

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// Translates a key event into a command.
///
/// Key releases and repeats are ignored so a press acts once on terminals
/// that report all three.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('n') | KeyCode::Char(' ') => Some(Command::NewGame),
        KeyCode::Enter => Some(Command::Confirm),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Coord::from_index(d as usize - 1))
            .map(Command::Place),
        KeyCode::Up => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Command::MoveCursor(Direction::Right)),
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Coord, direction: Direction) -> Coord {
    let last = BOARD_DIM - 1;
    match direction {
        Direction::Up => Coord::new(cursor.row.saturating_sub(1), cursor.col),
        Direction::Down => Coord::new((cursor.row + 1).min(last), cursor.col),
        Direction::Left => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
        Direction::Right => Coord::new(cursor.row, (cursor.col + 1).min(last)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_map_in_reading_order() {
        assert_eq!(
            command_for(&press(KeyCode::Char('1'))),
            Some(Command::Place(Coord::new(0, 0)))
        );
        assert_eq!(
            command_for(&press(KeyCode::Char('6'))),
            Some(Command::Place(Coord::new(1, 2)))
        );
        assert_eq!(
            command_for(&press(KeyCode::Char('9'))),
            Some(Command::Place(Coord::new(2, 2)))
        );
        assert_eq!(command_for(&press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for(&press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(&press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(command_for(&press(KeyCode::Char('n'))), Some(Command::NewGame));
        assert_eq!(command_for(&press(KeyCode::Char(' '))), Some(Command::NewGame));
        assert_eq!(command_for(&press(KeyCode::Enter)), Some(Command::Confirm));
        assert_eq!(command_for(&press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for(&release), None);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let corner = Coord::new(0, 0);
        assert_eq!(move_cursor(corner, Direction::Up), corner);
        assert_eq!(move_cursor(corner, Direction::Left), corner);
        assert_eq!(move_cursor(corner, Direction::Right), Coord::new(0, 1));
        assert_eq!(move_cursor(corner, Direction::Down), Coord::new(1, 0));

        let far = Coord::new(2, 2);
        assert_eq!(move_cursor(far, Direction::Down), far);
        assert_eq!(move_cursor(far, Direction::Right), far);
    }
}
