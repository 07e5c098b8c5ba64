//! Monotonic board invariant: each entry adds exactly one mark.

use super::super::{GameState, HistoryEntry, Position, Square};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: history starts empty and grows one cell at a time.
///
/// `history[0]` is the empty start with no location. Every later entry
/// equals its predecessor with exactly one previously empty cell filled,
/// and that cell is the entry's location.
pub struct MonotonicBoardInvariant;

impl MonotonicBoardInvariant {
    fn step_is_single_placement(prev: &HistoryEntry, next: &HistoryEntry) -> bool {
        let Some(location) = next.location else {
            return false;
        };
        let changed: Vec<Position> = Position::iter()
            .filter(|pos| prev.board.get(*pos) != next.board.get(*pos))
            .collect();

        changed == [location]
            && prev.board.get(location) == Square::Empty
            && next.board.get(location) != Square::Empty
    }
}

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        match history.first() {
            Some(first) if *first == HistoryEntry::start() => {}
            _ => return false,
        }

        history
            .windows(2)
            .all(|pair| Self::step_is_single_placement(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "History starts empty and each entry fills exactly one empty cell at its location"
    }
}
