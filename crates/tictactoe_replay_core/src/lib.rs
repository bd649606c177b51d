//! Pure tic-tac-toe logic with a replayable board history.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`] and named [`Position`]s
//! - **Rules**: [`evaluate`] maps a board snapshot to an [`Outcome`]
//! - **History**: [`diff_cell`] and [`MoveEntry`] describe each snapshot
//! - **Game**: [`GameState`] holds the snapshots and the replay pointer
//! - **Invariants**: properties of a [`GameState`] checked after each move
//!
//! # Example
//!
//! ```
//! use tictactoe_replay_core::{GameState, Mark, Outcome, Position};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::MiddleLeft,
//!             Position::Center, Position::BottomLeft] {
//!     game.play(pos);
//! }
//! assert!(matches!(game.outcome(), Outcome::Won { mark: Mark::X, .. }));
//!
//! // Replay from the start and branch.
//! game.jump(0).unwrap();
//! game.play(Position::Center);
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use error::HistoryError;
pub use game::GameState;
pub use history::{MoveEntry, describe_moves, diff_cell};
pub use position::Position;
pub use rules::{Outcome, evaluate};
pub use types::{Board, Mark, Square};
