//! Presentation-neutral projection of the game state.
//!
//! A [`GameView`] is everything a frontend needs to draw one frame. Building
//! one is pure, so it can be recomputed on every render.

use super::{Board, GameState, GameStatus, HistoryEntry, Position, WinningLine};
use serde::Serialize;
use tracing::instrument;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListEntry {
    /// History step this row jumps to.
    pub step: usize,
    /// Cell played to reach the step.
    pub location: Option<Position>,
    /// Button text.
    pub label: String,
    /// Whether this is the displayed step.
    pub is_current: bool,
}

impl MoveListEntry {
    fn new(step: usize, entry: &HistoryEntry, current_step: usize) -> Self {
        Self {
            step,
            location: entry.location,
            label: move_label(step, entry.location),
            is_current: step == current_step,
        }
    }
}

/// Label for a history row, with 1-based (column,row) coordinates.
pub fn move_label(step: usize, location: Option<Position>) -> String {
    match location {
        Some(pos) if step > 0 => format!(
            "Go to move # {} ({},{})",
            step,
            pos.column() + 1,
            pos.row() + 1
        ),
        _ => "Go to game start".to_string(),
    }
}

/// Everything needed to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Displayed board.
    pub board: Board,
    /// Derived status.
    pub status: GameStatus,
    /// Status line text.
    pub status_text: String,
    /// Cells to highlight.
    pub winning_line: Option<WinningLine>,
    /// Move list in display order.
    pub moves: Vec<MoveListEntry>,
    /// Whether `moves` is newest first.
    pub reverse_order: bool,
}

impl GameView {
    /// Projects a state into a view.
    #[instrument(skip(state), fields(step = state.step_number()))]
    pub fn project(state: &GameState) -> Self {
        let status = state.status();
        let mut moves: Vec<MoveListEntry> = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListEntry::new(step, entry, state.step_number()))
            .collect();
        if state.reverse_order() {
            moves.reverse();
        }

        Self {
            board: *state.current_board(),
            status,
            status_text: status.to_string(),
            winning_line: state.winning_line(),
            moves,
            reverse_order: state.reverse_order(),
        }
    }

    /// Whether `pos` belongs to the highlighted line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }

    /// Display row of the newest history entry.
    pub fn latest_row(&self) -> usize {
        if self.reverse_order {
            0
        } else {
            self.moves.len().saturating_sub(1)
        }
    }
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        Self::project(state)
    }
}
