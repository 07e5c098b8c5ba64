//! Headless replay of a move list.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use tictactoe_timeline::{Action, GameState, GameView, Position};
use tracing::{info, instrument, warn};

/// A move list entry that is not a cell index.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseMovesError {
    /// Not a number.
    #[display("{:?} is not a cell index", token)]
    NotANumber {
        /// Offending token.
        token: String,
    },
    /// Outside 0-8.
    #[display("cell {} is out of range (expected 0-8)", index)]
    OutOfRange {
        /// Offending index.
        index: usize,
    },
}

/// Parses `"0, 4,1"` into positions. Empty input is an empty list.
pub fn parse_moves(input: &str) -> Result<Vec<Position>, ParseMovesError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let index = token.parse::<usize>().map_err(|_| ParseMovesError::NotANumber {
                token: token.to_string(),
            })?;
            Position::from_index(index).ok_or(ParseMovesError::OutOfRange { index })
        })
        .collect()
}

/// Builds the action sequence for a replay.
pub fn actions(moves: &[Position], jump: Option<usize>, reverse: bool) -> Vec<Action> {
    let mut actions: Vec<Action> = moves.iter().copied().map(Action::Move).collect();
    actions.extend(jump.map(Action::Jump));
    if reverse {
        actions.push(Action::ToggleReverse);
    }
    actions
}

/// Dispatches actions in order; rejected ones are logged and skipped.
#[instrument(skip_all, fields(actions = actions.len()))]
pub fn run_actions(actions: &[Action]) -> GameState {
    actions.iter().fold(GameState::new(), |state, action| {
        match state.try_reduce(*action) {
            Ok(next) => next,
            Err(rejection) => {
                warn!(%action, %rejection, "Ignoring rejected action");
                state
            }
        }
    })
}

/// Renders the view as plain text.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    out.push_str(&view.board.display());
    out.push_str("\n\n");
    out.push_str(&view.status_text);
    if let Some(line) = view.winning_line {
        let cells: Vec<String> = line.cells.iter().map(|p| p.to_index().to_string()).collect();
        out.push_str(&format!(" (cells {})", cells.join(",")));
    }
    out.push_str("\n\n");
    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label));
    }
    out
}

/// Runs the `replay` command and prints to stdout.
#[instrument(skip(moves))]
pub fn run(moves: &str, jump: Option<usize>, reverse: bool, format: OutputFormat) -> Result<()> {
    let positions = parse_moves(moves).context("Invalid --moves")?;
    let state = run_actions(&actions(&positions, jump, reverse));
    let view = GameView::project(&state);
    info!(status = %view.status, steps = state.history().len(), "Replay finished");

    match format {
        OutputFormat::Text => print!("{}", render_text(&view)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&view).context("Failed to serialize view")?
        ),
    }
    Ok(())
}
