//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The mark placed into `history[k]` belongs to X when k is odd and to O
/// when k is even, and the explicit turn flag mirrors the parity of the
/// displayed step.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let marks_alternate = state.history().iter().enumerate().skip(1).all(|(k, entry)| {
            let expected = if k % 2 == 1 { Player::X } else { Player::O };
            entry
                .location
                .is_some_and(|pos| entry.board.get(pos) == Square::Occupied(expected))
        });

        marks_alternate && state.x_is_next() == (state.step_number() % 2 == 0)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...) and the turn flag matches step parity"
    }
}
