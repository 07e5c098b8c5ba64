//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe_timeline::{Palette, Settings};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use terminal::TerminalGuard;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
pub fn run_tui(settings: &Settings) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting tic-tac-toe TUI");

    let palette = settings.colors().palette()?;

    terminal::install_panic_hook();
    let _guard = TerminalGuard::enter().context("Failed to enter raw mode")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(), &palette);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for a key, update; one interaction at a time.
#[instrument(skip_all)]
fn run_app(terminal: &mut Term, mut app: App, palette: &Palette) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app, palette))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }

    info!(
        steps = app.state().history().len(),
        status = %app.state().status(),
        "Game closed"
    );
    Ok(())
}
