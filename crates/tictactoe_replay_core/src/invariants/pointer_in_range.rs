//! Pointer invariant: history is never empty and the pointer stays inside it.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: history starts with the empty board and `current_move` indexes it.
pub struct PointerInRangeInvariant;

impl Invariant<GameState> for PointerInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.history.first() == Some(&Board::new()) && state.current_move < state.history.len()
    }

    fn description() -> &'static str {
        "History starts at the empty board and the pointer is in range"
    }
}
