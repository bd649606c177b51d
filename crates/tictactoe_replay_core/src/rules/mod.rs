//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`] snapshot. They know nothing about
//! history, which keeps them usable for any snapshot the player jumps to.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use crate::{Board, Mark, Position};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// No three-in-a-row and at least one empty square.
    InProgress,
    /// `mark` completed `line`.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The winning positions, in line order.
        line: [Position; 3],
    },
    /// Full board, no winner.
    Draw,
}

impl Outcome {
    /// Whether the game is decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Whether `pos` belongs to the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        match self {
            Outcome::Won { line, .. } => line.contains(&pos),
            _ => false,
        }
    }
}

/// Evaluates a board snapshot.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        return Outcome::Won { mark, line };
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
