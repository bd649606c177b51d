//! Tic-tac-toe in the terminal with move history and replay.
//!
//! # Architecture
//!
//! - **Game logic**: [`tictactoe_replay_core`] (board, rules, history)
//! - **View**: [`View`] is derived from a [`GameState`] after every event
//! - **Input**: crossterm key and mouse events become [`Action`]s
//! - **Runtime**: [`Config`] from TOML and [`Cli`] flags, logs via tracing
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{Action, App, Position};
//!
//! let mut app = App::default();
//! app.apply(Action::Play(Position::Center));
//! assert_eq!(app.view().status(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod tui;

pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use logging::init_logging;
pub use tui::{
    Action, App, CellView, CursorMove, MoveItem, ScreenLayout, View, action_for_key,
    action_for_mouse, draw, move_cursor, run, status_line,
};

pub use tictactoe_replay_core::{
    Board, GameState, HistoryError, Mark, MoveEntry, Outcome, Position, Square, diff_cell,
    evaluate,
};
