//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_replay_core::{Mark, Outcome, Position, Square};

use super::layout::{CELL_HEIGHT, CELL_WIDTH};
use super::{CellView, ScreenLayout, View};

const HELP: &str = "←↑↓→ move  Enter/1-9 play  s sort  [ ] step  Home/End  q quit";

/// Draws the whole screen and returns the layout used, for hit-testing.
pub fn draw(frame: &mut Frame, view: &View, cursor: Position) -> ScreenLayout {
    let layout = ScreenLayout::new(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, *layout.title());

    let status_style = match view.outcome() {
        Outcome::Won { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Outcome::Draw => Style::default().fg(Color::Magenta),
        Outcome::InProgress => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status().as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, *layout.status());

    draw_grid(frame, &layout, view, cursor);
    draw_info(frame, &layout, view);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, *layout.help());

    layout
}

fn draw_grid(frame: &mut Frame, layout: &ScreenLayout, view: &View, cursor: Position) {
    let blank = " ".repeat(CELL_WIDTH as usize);
    let bar = "─".repeat(CELL_WIDTH as usize);
    let cell_row = format!("{blank}│{blank}│{blank}");
    let separator = format!("{bar}┼{bar}┼{bar}");

    let mut lines = Vec::new();
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::from(separator.clone()));
        }
        lines.extend((0..CELL_HEIGHT).map(|_| Line::from(cell_row.clone())));
    }
    let background = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(background, *layout.grid());

    for cell in view.cells() {
        let area = layout.cells()[cell.position().to_index()];
        draw_cell(frame, area, cell, *cell.position() == cursor);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, is_cursor: bool) {
    let (symbol, mut style) = match cell.square() {
        Square::Empty => (
            (cell.position().to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if *cell.winning() {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Middle row of the square carries the symbol.
    let text = Text::from(vec![Line::default(), Line::from(Span::raw(symbol))]);
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, layout: &ScreenLayout, view: &View) {
    frame.render_widget(Paragraph::new(view.move_indicator().as_str()), *layout.indicator());

    let toggle = Paragraph::new(format!("[s] {}", view.order_label()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(toggle, *layout.toggle());

    let lines: Vec<Line> = view
        .moves()
        .iter()
        .map(|item| {
            let style = if *item.current() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(item.label().as_str(), style))
        })
        .collect();

    let scroll = layout.move_scroll(view.moves().len(), view.current_row());
    let list = Paragraph::new(lines)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(Block::default().title("History").borders(Borders::ALL));
    frame.render_widget(list, *layout.moves());
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use tictactoe_replay_core::GameState;

    fn rendered_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn render(state: &GameState) -> (Vec<String>, ScreenLayout, Buffer) {
        render_sized(state, 80, 24)
    }

    fn render_sized(state: &GameState, width: u16, height: u16) -> (Vec<String>, ScreenLayout, Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let view = View::from_state(state);
        let mut layout = None;
        terminal
            .draw(|frame| layout = Some(draw(frame, &view, Position::Center)))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (rendered_lines(&buffer), layout.unwrap(), buffer)
    }

    #[test]
    fn test_fresh_screen_text() {
        let (lines, _, _) = render(&GameState::new());
        let screen = lines.join("\n");
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("You are at move #0"));
        assert!(screen.contains("[s] Sort: ascending"));
        assert!(screen.contains("Go to game start"));
    }

    #[test]
    fn test_winning_squares_highlighted() {
        let mut state = GameState::new();
        for i in [0, 1, 3, 4, 6] {
            state.play(Position::from_index(i).unwrap());
        }
        let (lines, layout, buffer) = render(&state);
        assert!(lines.join("\n").contains("Winner: X"));

        for pos in Position::ALL {
            let rect = layout.cells()[pos.to_index()];
            let bg = buffer[(rect.x + CELL_WIDTH / 2, rect.y + 1)].bg;
            let winning = matches!(pos, Position::TopLeft | Position::MiddleLeft | Position::BottomLeft);
            assert_eq!(bg == Color::Green, winning, "unexpected highlight at {}", pos);
        }
    }

    #[test]
    fn test_move_list_rows_match_layout() {
        let mut state = GameState::new();
        state.play(Position::TopRight);
        state.play(Position::Center);
        state.toggle_order();

        let (lines, layout, _) = render(&state);
        let rows = *layout.move_rows();
        let first = &lines[rows.y as usize];
        let last = &lines[rows.y as usize + 2];
        assert!(first.contains("Go to move #2 (1, 1)"));
        assert!(last.contains("Go to game start"));
    }

    #[test]
    fn test_toggle_caption_fits_its_hit_box() {
        let mut state = GameState::new();
        state.toggle_order();
        let (lines, layout, _) = render(&state);
        let toggle = *layout.toggle();
        let caption: String = lines[toggle.y as usize]
            .chars()
            .skip(toggle.x as usize)
            .take(toggle.width as usize)
            .collect();
        assert_eq!(caption, "[s] Sort: descending");
    }

    #[test]
    fn test_short_terminal_scrolls_to_current_move() {
        let mut state = GameState::new();
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.play(Position::from_index(i).unwrap());
        }
        let (lines, layout, _) = render_sized(&state, 80, 13);
        let rows = *layout.move_rows();
        assert_eq!(rows.height, 7);

        let first = &lines[rows.y as usize];
        let last = &lines[(rows.y + rows.height - 1) as usize];
        assert!(first.contains("Go to move #3 "));
        assert!(last.contains("Go to move #9 "));
        assert!(!lines.join("\n").contains("Go to game start"));
    }
}
