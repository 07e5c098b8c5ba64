//! First-class actions for the game reducer.
//!
//! Every user interaction is an [`Action`] value. The reducer either accepts
//! it and produces a new state, or rejects it with a [`Rejection`] and the
//! state stays as it was.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A user intent dispatched against a [`GameState`](super::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Place the next player's mark on a cell.
    #[display("move {}", _0)]
    Move(Position),
    /// Show a historical step.
    #[display("jump to step {}", _0)]
    Jump(usize),
    /// Start a new game.
    #[display("reset")]
    Reset,
    /// Flip the move list display order.
    #[display("toggle reverse")]
    ToggleReverse,
}

/// Why an action left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(#[error(not(source))] Player),

    /// The requested step does not exist in history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
