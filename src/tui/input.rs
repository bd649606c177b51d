//! Keyboard and mouse routing.
//!
//! Terminal events become [`Action`]s here; only [`App::apply`](super::App::apply)
//! changes state.

use super::{ScreenLayout, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_replay_core::Position;

/// Cursor movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play a square.
    Play(Position),
    /// Play the square under the cursor.
    PlayCursor,
    /// Move the board cursor.
    MoveCursor(CursorMove),
    /// Show history snapshot `n`.
    Jump(usize),
    /// Show the previous snapshot.
    StepBack,
    /// Show the next snapshot.
    StepForward,
    /// Show the newest snapshot.
    JumpToLatest,
    /// Flip the move list order.
    ToggleOrder,
    /// Leave the game.
    Quit,
}

/// Moves cursor within the grid, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: CursorMove) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        CursorMove::Up => (row.saturating_sub(1), col),
        CursorMove::Down => ((row + 1).min(2), col),
        CursorMove::Left => (row, col.saturating_sub(1)),
        CursorMove::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to an action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Up => Action::MoveCursor(CursorMove::Up),
        KeyCode::Down => Action::MoveCursor(CursorMove::Down),
        KeyCode::Left => Action::MoveCursor(CursorMove::Left),
        KeyCode::Right => Action::MoveCursor(CursorMove::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Action::Play(Position::from_index(digit - 1)?)
        }
        KeyCode::Char('s') => Action::ToggleOrder,
        KeyCode::Home => Action::Jump(0),
        KeyCode::End => Action::JumpToLatest,
        KeyCode::PageUp | KeyCode::Char('[') => Action::StepBack,
        KeyCode::PageDown | KeyCode::Char(']') => Action::StepForward,
        _ => return None,
    };
    Some(action)
}

/// Maps a left click to an action using the last drawn layout.
///
/// Grid squares play, move list rows jump, the toggle flips the order.
/// Move list rows are offset by the same scroll `ui::draw` applied.
/// Everything else, including other buttons, is ignored.
pub fn action_for_mouse(mouse: MouseEvent, layout: &ScreenLayout, view: &View) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (column, row) = (mouse.column, mouse.row);

    if let Some(pos) = layout.cell_at(column, row) {
        return Some(Action::Play(pos));
    }
    if layout.is_toggle(column, row) {
        return Some(Action::ToggleOrder);
    }
    let scroll = layout.move_scroll(view.moves().len(), view.current_row());
    layout
        .move_row_at(column, row)
        .and_then(|row| view.move_at_row(row + scroll))
        .map(Action::Jump)
}
