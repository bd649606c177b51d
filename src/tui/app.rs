//! Application state and logic.

use super::input::{Action, move_cursor};
use super::View;
use tictactoe_replay_core::{GameState, Position};
use tracing::{debug, error, instrument};

/// Main application state.
///
/// Owns the [`GameState`]; the renderer only ever sees it through a [`View`].
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    quit: bool,
}

impl App {
    /// Creates a new application with the given move list order.
    pub fn new(ascending: bool) -> Self {
        Self {
            game: GameState::with_order(ascending),
            cursor: Position::Center,
            quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Derives what to draw.
    pub fn view(&self) -> View {
        View::from_state(&self.game)
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play(position) => {
                self.cursor = position;
                self.game.play(position);
            }
            Action::PlayCursor => {
                self.game.play(self.cursor);
            }
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Jump(index) => self.jump(index),
            Action::StepBack => {
                if let Some(index) = self.game.current_move().checked_sub(1) {
                    self.jump(index);
                }
            }
            Action::StepForward => {
                let next = self.game.current_move() + 1;
                if next <= self.game.latest_move() {
                    self.jump(next);
                }
            }
            Action::JumpToLatest => self.jump(self.game.latest_move()),
            Action::ToggleOrder => self.game.toggle_order(),
            Action::Quit => {
                debug!("Quit requested");
                self.quit = true;
            }
        }
    }

    fn jump(&mut self, index: usize) {
        if let Err(e) = self.game.jump(index) {
            error!(error = %e, "Rejected jump");
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::CursorMove;

    #[test]
    fn test_cursor_play() {
        let mut app = App::default();
        app.apply(Action::MoveCursor(CursorMove::Up));
        app.apply(Action::PlayCursor);

        assert_eq!(app.cursor(), Position::TopCenter);
        assert!(!app.game().current_board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_stepping_stays_in_range() {
        let mut app = App::default();
        app.apply(Action::StepBack);
        assert_eq!(app.game().current_move(), 0);

        app.apply(Action::Play(Position::Center));
        app.apply(Action::Play(Position::TopLeft));
        app.apply(Action::StepBack);
        app.apply(Action::StepBack);
        assert_eq!(app.game().current_move(), 0);

        app.apply(Action::StepForward);
        app.apply(Action::StepForward);
        app.apply(Action::StepForward);
        assert_eq!(app.game().current_move(), 2);
    }

    #[test]
    fn test_bad_jump_is_logged_not_fatal() {
        let mut app = App::default();
        app.apply(Action::Jump(7));
        assert_eq!(app.game().current_move(), 0);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
