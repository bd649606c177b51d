//! Screen regions shared by drawing and mouse hit-testing.

use derive_getters::Getters;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tictactoe_replay_core::Position;

/// Width of one grid square in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one grid square in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Grid width including the two vertical separators.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Grid height including the two horizontal separators.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Width of the longest order toggle caption, `[s] Sort: descending`.
pub const TOGGLE_WIDTH: u16 = "[s] Sort: descending".len() as u16;

const BOARD_COLUMN_WIDTH: u16 = GRID_WIDTH + 4;
const STATUS_HEIGHT: u16 = 3;

/// Where each part of the screen goes for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct ScreenLayout {
    /// Title line.
    title: Rect,
    /// Bordered status box.
    status: Rect,
    /// The 3x3 grid with separators.
    grid: Rect,
    /// One rect per square, in index order.
    cells: [Rect; 9],
    /// "You are at move #n" line.
    indicator: Rect,
    /// Order toggle caption. No wider than the caption itself.
    toggle: Rect,
    /// Bordered move list.
    moves: Rect,
    /// Move list rows inside the border.
    move_rows: Rect,
    /// Key help line.
    help: Rect,
}

impl ScreenLayout {
    /// Computes the layout for a terminal area.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Help
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_COLUMN_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        let board_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(STATUS_HEIGHT), Constraint::Min(0)])
            .split(columns[0]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Move indicator
                Constraint::Length(1), // Toggle
                Constraint::Min(0),    // Move list
            ])
            .split(columns[1]);

        let grid = center_rect(board_column[1], GRID_WIDTH, GRID_HEIGHT);
        let cells = Position::ALL.map(|pos| cell_rect(grid, pos));
        let moves = info[2];

        Self {
            title: rows[0],
            status: board_column[0],
            grid,
            cells,
            indicator: info[0],
            toggle: Rect {
                width: info[1].width.min(TOGGLE_WIDTH),
                ..info[1]
            },
            moves,
            move_rows: inner(moves),
            help: rows[2],
        }
    }

    /// Square under a terminal cell, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cells[pos.to_index()], column, row))
    }

    /// Whether a terminal cell is on the order toggle.
    pub fn is_toggle(&self, column: u16, row: u16) -> bool {
        contains(self.toggle, column, row)
    }

    /// Move list row under a terminal cell, counted from the top of the list.
    pub fn move_row_at(&self, column: u16, row: u16) -> Option<usize> {
        contains(self.move_rows, column, row).then(|| usize::from(row - self.move_rows.y))
    }

    /// First list entry to draw so that entry `current` of `len` is on screen.
    ///
    /// Zero while the whole list fits. Otherwise the list scrolls just far
    /// enough to put `current` on the last visible row.
    pub fn move_scroll(&self, len: usize, current: usize) -> usize {
        let visible = usize::from(self.move_rows.height);
        if visible == 0 || len <= visible {
            return 0;
        }
        current.saturating_sub(visible - 1).min(len - visible)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn inner(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

fn cell_rect(grid: Rect, pos: Position) -> Rect {
    let col = pos.col() as u16;
    let row = pos.row() as u16;
    let cell = Rect::new(
        grid.x + col * (CELL_WIDTH + 1),
        grid.y + row * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    );
    cell.intersection(grid)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
