//! Replayable game state.
//!
//! [`GameState`] owns every board snapshot the game has produced and a
//! pointer to the one currently shown. Playing from an earlier snapshot
//! branches: the snapshots after the pointer are dropped before the new one
//! is appended, so there is no redo.

use crate::history::{MoveEntry, describe_moves};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::{Outcome, evaluate};
use crate::{Board, HistoryError, Mark, Position};
use tracing::{debug, info, instrument};

/// Board history, current pointer and move list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Snapshots; index 0 is always the empty board.
    pub(crate) history: Vec<Board>,
    /// Index of the snapshot on display.
    pub(crate) current_move: usize,
    /// Move list order (display only).
    pub(crate) ascending: bool,
}

impl GameState {
    /// Creates a new game with the move list in ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// Creates a new game with the given move list order.
    #[instrument]
    pub fn with_order(ascending: bool) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            ascending,
        }
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Index of the newest snapshot.
    pub fn latest_move(&self) -> usize {
        self.history.len() - 1
    }

    /// The snapshot on display.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Mark that plays next from the current snapshot.
    pub fn next_mark(&self) -> Mark {
        Mark::to_move_at(self.current_move)
    }

    /// Evaluates the snapshot on display.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Plays the next mark at `position`.
    ///
    /// Returns `false` without touching the state when the current snapshot
    /// is already decided or the square is taken. Playing from an earlier
    /// snapshot discards every later one.
    #[instrument(skip(self), fields(position = %position, current_move = self.current_move))]
    pub fn play(&mut self, position: Position) -> bool {
        let outcome = self.outcome();
        if outcome.is_over() {
            debug!(?outcome, "Ignoring move on a decided board");
            return false;
        }
        if !self.current_board().is_empty(position) {
            debug!("Ignoring move on an occupied square");
            return false;
        }

        let mark = self.next_mark();
        let next = self.current_board().with_mark(position, mark);

        let discarded = self.latest_move() - self.current_move;
        if discarded > 0 {
            info!(discarded, "Branching from an earlier move");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.latest_move();

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "invariants violated after play: {:?}",
            GameInvariants::check_all(self)
        );
        info!(%mark, move_number = self.current_move, "Move played");
        true
    }

    /// Shows snapshot `index` without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if `index` is past the newest snapshot.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.history.len() {
            return Err(HistoryError::out_of_range(index, self.history.len()));
        }
        self.current_move = index;
        debug!("Jumped to move");
        Ok(())
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Toggled move order");
    }

    /// Move list entries in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut entries = describe_moves(&self.history);
        if !self.ascending {
            entries.reverse();
        }
        entries
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play_all(state: &mut GameState, indices: &[usize]) {
        for &i in indices {
            let pos = Position::from_index(i).unwrap();
            assert!(state.play(pos), "move at {} rejected", i);
        }
    }

    #[test]
    fn test_fresh_state() {
        let state = GameState::new();
        assert_eq!(state.history(), &[Board::new()]);
        assert_eq!(state.current_move(), 0);
        assert_eq!(state.next_mark(), Mark::X);
        assert!(state.is_ascending());
    }

    #[test]
    fn test_play_appends_and_advances() {
        let mut state = GameState::new();
        assert!(state.play(Position::TopLeft));

        assert_eq!(state.current_move(), 1);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.current_board().get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(state.next_mark(), Mark::O);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut state = GameState::new();
        play_all(&mut state, &[4]);
        let before = state.clone();

        assert!(!state.play(Position::Center));
        assert_eq!(state, before);
    }

    #[test]
    fn test_decided_board_is_ignored() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 3, 4, 6]);
        let before = state.clone();

        assert!(!state.play(Position::BottomRight));
        assert_eq!(state, before);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 2]);

        state.jump(1).unwrap();
        assert_eq!(state.current_move(), 1);
        assert_eq!(state.history().len(), 4);
        assert_eq!(state.next_mark(), Mark::O);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut state = GameState::new();
        let err = state.jump(1).unwrap_err();
        assert_eq!((err.index, err.len), (1, 1));
        assert_eq!(state.current_move(), 0);
    }

    #[test]
    fn test_branching_discards_later_snapshots() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 2]);

        state.jump(1).unwrap();
        assert!(state.play(Position::Center));

        assert_eq!(state.history().len(), 3);
        assert_eq!(state.current_move(), 2);
        assert_eq!(state.current_board().get(Position::Center), Square::Occupied(Mark::O));
        assert!(state.current_board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_play_from_decided_snapshot_after_jump_back() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 3, 4, 6]);

        // Earlier snapshot is still in progress, so play is allowed there.
        state.jump(4).unwrap();
        assert!(state.play(Position::BottomRight));
        assert_eq!(state.history().len(), 6);
    }

    #[test]
    fn test_toggle_order_reverses_moves() {
        let mut state = GameState::new();
        play_all(&mut state, &[4, 0]);

        let ascending: Vec<usize> = state.moves().iter().map(MoveEntry::index).collect();
        assert_eq!(ascending, vec![0, 1, 2]);

        state.toggle_order();
        let descending: Vec<usize> = state.moves().iter().map(MoveEntry::index).collect();
        assert_eq!(descending, vec![2, 1, 0]);
        assert_eq!(state.current_move(), 2);
        assert_eq!(state.history().len(), 3);
    }
}
