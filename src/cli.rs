//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe with time-travel move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with move history navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a move list headlessly and print the resulting view
    Replay {
        /// Comma-separated cell indices 0-8 in row-major order, e.g. `0,4,1,5,2`
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Step to display after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(short, long)]
        reverse: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints the view.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Board grid, status and move list
    Text,
    /// Pretty-printed JSON
    Json,
}
