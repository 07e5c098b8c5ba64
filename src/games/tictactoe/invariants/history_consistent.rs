//! History consistency invariant: the step pointer is valid and nothing is played past a win.

use super::super::GameState;
use super::super::rules::detect_win;
use super::Invariant;

/// Invariant: The displayed step exists and history stops at the first win.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if state.step_number() >= history.len() {
            return false;
        }

        // Only the last entry may hold a winning line.
        history
            .iter()
            .rev()
            .skip(1)
            .all(|entry| detect_win(&entry.board).is_none())
    }

    fn description() -> &'static str {
        "Step number indexes history and no entry follows a won board"
    }
}
