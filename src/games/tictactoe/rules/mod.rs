//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here knows about
//! history, turns, or the UI.

pub mod win;

pub use win::{LINES, WinningLine, check_winner, detect_win};
