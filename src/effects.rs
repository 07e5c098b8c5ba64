//! Side effects observed from state changes.
//!
//! The reducer never touches the UI. Frontends pass each transition through
//! [`on_state_change`] and carry out whatever [`Effect`]s come back.

use crate::games::tictactoe::GameState;
use tracing::trace;

/// A presentation-side effect requested by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Bring the newest move list entry into view.
    ScrollToLatest,
}

/// Effects to run after the first render.
pub fn on_mount(state: &GameState) -> Vec<Effect> {
    follow_latest(state)
}

/// Effects to run after a transition from `before` to `after`.
///
/// Rejected actions and jumps to the displayed step return the same state
/// and produce nothing.
pub fn on_state_change(before: &GameState, after: &GameState) -> Vec<Effect> {
    if before == after {
        return Vec::new();
    }
    follow_latest(after)
}

fn follow_latest(state: &GameState) -> Vec<Effect> {
    if state.reverse_order() {
        Vec::new()
    } else {
        trace!(history_len = state.history().len(), "Following latest entry");
        vec![Effect::ScrollToLatest]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_mount_scrolls_in_forward_order() {
        assert_eq!(on_mount(&GameState::new()), vec![Effect::ScrollToLatest]);
    }

    #[test]
    fn test_move_scrolls_in_forward_order() {
        let before = GameState::new();
        let after = before.apply_move(Position::Center);
        assert_eq!(on_state_change(&before, &after), vec![Effect::ScrollToLatest]);
    }

    #[test]
    fn test_reverse_order_never_scrolls() {
        let before = GameState::new().toggle_reverse();
        let after = before.apply_move(Position::Center);
        assert!(on_state_change(&before, &after).is_empty());
        assert!(on_mount(&before).is_empty());
    }

    #[test]
    fn test_rejected_action_has_no_effect() {
        let before = GameState::new().apply_move(Position::Center);
        let after = before.apply_move(Position::Center);
        assert!(on_state_change(&before, &after).is_empty());
    }

    #[test]
    fn test_jump_to_displayed_step_has_no_effect() {
        let before = GameState::new().apply_move(Position::Center);
        let after = before.jump_to(before.step_number());
        assert_eq!(after, before);
        assert!(on_state_change(&before, &after).is_empty());
    }
}
