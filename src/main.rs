//! tictactoe_timeline - Unified CLI
//!
//! Plays in the terminal or replays a move list headlessly.

#![warn(missing_docs)]

mod cli;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_timeline::Settings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&settings),
        Command::Replay {
            moves,
            jump,
            reverse,
            format,
        } => {
            init_stderr_tracing(&settings);
            replay::run(&moves, jump, reverse, format)
        }
    }
}

/// Logs to stderr so stdout carries only the replay output.
fn init_stderr_tracing(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
