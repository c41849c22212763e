//! Terminal UI for Strictly Timetravel.
//!
//! Single-threaded: each input event becomes at most one [`Intent`], is
//! applied to the [`App`], and the frame is redrawn.

mod app;
mod input;
mod renderers;
mod ui;

pub use app::{App, Direction, Focus, Intent, ViewState};
pub use renderers::{CellRenderer, HistoryList, ListRenderer, MarkCells};

use crate::settings::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI client
#[instrument(skip(settings))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    // Log to a file so output does not tear the alternate screen.
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        sort = ?settings.sort(),
        log_filter = %settings.log_filter(),
        "Starting Strictly Timetravel TUI"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(*settings.sort());
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        steps = app.game().history().len(),
        status = %app.game().status(),
        "TUI exited"
    );
    res
}

fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        let intent = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                input::intent_for_key(key.code, app)
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                ui::click_intent(app, mouse.column, mouse.row)
            }
            _ => None,
        };

        if let Some(intent) = intent {
            debug!(?intent, "Dispatching intent");
            app.update(intent)?;
        }
    }
    Ok(())
}
