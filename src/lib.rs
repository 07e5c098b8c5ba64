//! Tic-tac-toe with a navigable move history.
//!
//! The game core is a pure state value plus a reducer: every interaction is
//! an [`Action`] and [`GameState::reduce`] returns the next state. Win
//! detection is a stateless function over one board snapshot.
//!
//! # Architecture
//!
//! - **Games**: board types, win detection, the history-carrying state and
//!   its invariants, and a presentation-neutral [`GameView`]
//! - **Effects**: UI side effects derived from state transitions
//! - **Config**: TOML settings for logging and colors
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, GameStatus, Player, Position};
//!
//! let state = [0, 4, 1, 5, 2]
//!     .into_iter()
//!     .filter_map(Position::from_index)
//!     .fold(GameState::new(), |state, pos| state.apply_move(pos));
//!
//! assert_eq!(state.status(), GameStatus::Winner(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod effects;
pub mod games;

// Crate-level exports - Configuration
pub use config::{ColorSettings, ConfigError, DEFAULT_CONFIG_PATH, Palette, Settings};

// Crate-level exports - Effects
pub use effects::{Effect, on_mount, on_state_change};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, GameState, GameStatus, GameView, HistoryEntry, MAX_MOVES, MoveListEntry,
    Player, Position, Rejection, Square, WinningLine, check_winner, detect_win,
};
