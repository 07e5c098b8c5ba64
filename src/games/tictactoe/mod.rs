mod action;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::{Action, Rejection};
pub use position::Position;
pub use rules::{WinningLine, check_winner, detect_win};
pub use state::{GameState, GameStatus, HistoryEntry, MAX_MOVES};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveListEntry};
