//! Describing history entries for the move list.

use crate::{Board, Position};
use tracing::instrument;

/// Returns the first position where the two boards differ.
///
/// Adjacent history snapshots differ in exactly one square, so for them this
/// is the square that was played. Identical boards yield `None`.
#[instrument(level = "trace", skip_all)]
pub fn diff_cell(prev: &Board, next: &Board) -> Option<Position> {
    Position::ALL
        .into_iter()
        .find(|pos| prev.get(*pos) != next.get(*pos))
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    index: usize,
    location: Option<Position>,
}

impl MoveEntry {
    /// Creates an entry for history index `index`.
    pub fn new(index: usize, location: Option<Position>) -> Self {
        Self { index, location }
    }

    /// History index this entry jumps to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Square played to reach this snapshot. `None` for the game start.
    pub fn location(&self) -> Option<Position> {
        self.location
    }

    /// Whether this entry is the empty starting board.
    pub fn is_start(&self) -> bool {
        self.index == 0
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.index, self.location) {
            (0, _) => write!(f, "Go to game start"),
            (index, Some(pos)) => write!(f, "Go to move #{} ({}, {})", index, pos.row(), pos.col()),
            (index, None) => write!(f, "Go to move #{}", index),
        }
    }
}

/// Builds one entry per snapshot, oldest first.
pub fn describe_moves(history: &[Board]) -> Vec<MoveEntry> {
    let mut entries = Vec::with_capacity(history.len());
    if history.is_empty() {
        return entries;
    }

    entries.push(MoveEntry::new(0, None));
    entries.extend(
        history
            .windows(2)
            .enumerate()
            .map(|(i, pair)| MoveEntry::new(i + 1, diff_cell(&pair[0], &pair[1]))),
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_diff_cell_finds_played_square() {
        let prev = Board::new().with_mark(Position::Center, Mark::X);
        let next = prev.with_mark(Position::BottomLeft, Mark::O);
        assert_eq!(diff_cell(&prev, &next), Some(Position::BottomLeft));
        assert_eq!(diff_cell(&prev, &prev), None);
    }

    #[test]
    fn test_start_label() {
        assert_eq!(MoveEntry::new(0, None).to_string(), "Go to game start");
    }

    #[test]
    fn test_move_label_uses_row_then_col() {
        let entry = MoveEntry::new(3, Some(Position::MiddleRight));
        assert_eq!(entry.to_string(), "Go to move #3 (1, 2)");
    }

    #[test]
    fn test_describe_moves() {
        let b0 = Board::new();
        let b1 = b0.with_mark(Position::TopRight, Mark::X);
        let b2 = b1.with_mark(Position::BottomLeft, Mark::O);

        let entries = describe_moves(&[b0, b1, b2]);
        assert_eq!(
            entries,
            vec![
                MoveEntry::new(0, None),
                MoveEntry::new(1, Some(Position::TopRight)),
                MoveEntry::new(2, Some(Position::BottomLeft)),
            ]
        );
        assert!(entries[0].is_start());
    }
}
