//! Single-step invariant: each snapshot fills exactly one empty square.

use super::Invariant;
use crate::{Board, GameState, Position};

/// Invariant: adjacent snapshots differ in exactly one square, which was
/// empty before and occupied after. Squares are never cleared.
pub struct SingleStepInvariant;

fn is_single_step(prev: &Board, next: &Board) -> bool {
    let mut changed = Position::ALL
        .into_iter()
        .filter(|pos| prev.get(*pos) != next.get(*pos));

    match (changed.next(), changed.next()) {
        (Some(pos), None) => prev.is_empty(pos) && !next.is_empty(pos),
        _ => false,
    }
}

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .windows(2)
            .all(|pair| is_single_step(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty square"
    }
}
