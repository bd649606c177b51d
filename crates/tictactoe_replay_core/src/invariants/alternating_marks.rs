//! Alternating marks invariant: snapshots alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Mark, Position};

/// Invariant: the square filled to reach snapshot `i` holds the mark that
/// moves at `i - 1`, so X fills odd snapshots and O even ones.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        state.history.windows(2).enumerate().all(|(i, pair)| {
            Position::ALL
                .into_iter()
                .filter(|pos| pair[0].get(*pos) != pair[1].get(*pos))
                .all(|pos| pair[1].get(pos).mark() == Some(Mark::to_move_at(i)))
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ... starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_fresh_game_holds() {
        assert!(AlternatingMarksInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            state.play(pos);
        }
        assert!(AlternatingMarksInvariant::holds(&state));
    }

    #[test]
    fn test_o_first_violates() {
        let mut state = GameState::new();
        state.history.push(Board::new().with_mark(Position::Center, Mark::O));
        assert!(!AlternatingMarksInvariant::holds(&state));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut state = GameState::new();
        let first = Board::new().with_mark(Position::Center, Mark::X);
        state.history.push(first);
        state.history.push(first.with_mark(Position::TopLeft, Mark::X));
        assert!(!AlternatingMarksInvariant::holds(&state));
    }
}
