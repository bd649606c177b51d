//! Display model derived from a [`GameState`].
//!
//! `View::from_state` is a pure function: everything the screen shows is
//! computed here, and `ui::draw` only lays it out.

use derive_getters::Getters;
use derive_new::new;
use tictactoe_replay_core::{GameState, Outcome, Position, Square};

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct CellView {
    /// Board position.
    position: Position,
    /// Contents.
    square: Square,
    /// Part of the winning line.
    winning: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct MoveItem {
    /// History index the entry jumps to.
    index: usize,
    /// Button text.
    label: String,
    /// The entry for the snapshot on display.
    current: bool,
}

/// Everything the screen shows for one state.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct View {
    /// Winner, draw or next player line.
    status: String,
    /// Evaluation of the snapshot on display.
    outcome: Outcome,
    /// Grid squares in index order.
    cells: [CellView; 9],
    /// "You are at move #n".
    move_indicator: String,
    /// Caption of the order toggle.
    order_label: String,
    /// Move list in display order.
    moves: Vec<MoveItem>,
}

/// Status line for a finished or ongoing game.
pub fn status_line(state: &GameState) -> String {
    match state.outcome() {
        Outcome::Won { mark, .. } => format!("Winner: {}", mark),
        Outcome::Draw => "Draw! The game is a tie.".to_string(),
        Outcome::InProgress => format!("Next player: {}", state.next_mark()),
    }
}

impl View {
    /// Derives the view for `state`.
    pub fn from_state(state: &GameState) -> Self {
        let outcome = state.outcome();
        let board = state.current_board();

        let cells = Position::ALL
            .map(|position| CellView::new(position, board.get(position), outcome.contains(position)));

        let moves = state
            .moves()
            .into_iter()
            .map(|entry| {
                MoveItem::new(
                    entry.index(),
                    entry.to_string(),
                    entry.index() == state.current_move(),
                )
            })
            .collect();

        let order_label = if state.is_ascending() {
            "Sort: ascending"
        } else {
            "Sort: descending"
        };

        Self {
            status: status_line(state),
            outcome,
            cells,
            move_indicator: format!("You are at move #{}", state.current_move()),
            order_label: order_label.to_string(),
            moves,
        }
    }

    /// History index of the entry shown on list row `row`.
    pub fn move_at_row(&self, row: usize) -> Option<usize> {
        self.moves.get(row).map(|item| item.index)
    }

    /// List row of the entry for the snapshot on display.
    pub fn current_row(&self) -> usize {
        self.moves.iter().position(|item| item.current).unwrap_or(0)
    }
}
