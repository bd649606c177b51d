//! Terminal UI: event loop, input routing and rendering.

mod app;
mod guard;
mod input;
mod layout;
mod ui;
mod view;

pub use app::App;
pub use input::{Action, CursorMove, action_for_key, action_for_mouse, move_cursor};
pub use layout::ScreenLayout;
pub use ui::draw;
pub use view::{CellView, MoveItem, View, status_line};

use crate::Config;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use guard::RestoreGuard;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
///
/// The terminal is restored before returning, including on error or panic.
#[instrument(skip_all, fields(ascending = *config.ascending()))]
pub fn run(config: &Config) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = RestoreGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(*config.ascending());
    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().latest_move(), "Exiting");
    res
}

/// Leaves raw mode and the alternate screen. Each step runs even if an
/// earlier one fails.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Draw, wait for one event, apply it, repeat.
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        let view = app.view();
        let mut layout = None;
        terminal.draw(|frame| layout = Some(draw(frame, &view, app.cursor())))?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => action_for_key(key),
            Event::Mouse(mouse) => layout
                .as_ref()
                .and_then(|layout| action_for_mouse(mouse, layout, &view)),
            _ => None,
        };

        if let Some(action) = action {
            debug!(?action, "Handling action");
            app.apply(action);
        }
        if app.should_quit() {
            return Ok(());
        }
    }
}
