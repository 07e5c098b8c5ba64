//! History-carrying game state and its reducer.
//!
//! [`GameState`] is an immutable value. Every transition goes through
//! [`GameState::try_reduce`] (strict, reports why an action was refused) or
//! [`GameState::reduce`] (refusals are no-ops). The named operations
//! `apply_move`, `jump_to`, `reset` and `toggle_reverse` are thin wrappers.

use super::action::{Action, Rejection};
use super::rules::{WinningLine, detect_win};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of moves that fill the board.
pub const MAX_MOVES: usize = 9;

/// One board snapshot plus the cell played to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryEntry {
    /// Board after the move.
    pub board: Board,
    /// Cell played to reach this snapshot; `None` for the game start.
    pub location: Option<Position>,
}

impl HistoryEntry {
    /// The empty starting entry.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }
}

/// Status derived from the displayed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// The displayed board has three in a row.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// All nine moves were played without a winner.
    #[display("It's a draw")]
    Draw,
    /// Game continues with the given player.
    #[display("Next player: {}", _0)]
    NextTurn(Player),
}

impl GameStatus {
    /// Returns true for `Winner` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextTurn(_))
    }
}

/// Complete game state: history, displayed step, turn and display order.
///
/// Serialize-only: every value is built by the reducer, so the history is
/// never empty and the step is always in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(super) history: Vec<HistoryEntry>,
    pub(super) step_number: usize,
    pub(super) x_is_next: bool,
    pub(super) reverse_order: bool,
}

impl GameState {
    /// Creates the state shown at mount: a single empty entry, X to move.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            step_number: 0,
            x_is_next: true,
            reverse_order: false,
        }
    }

    /// Full history, including entries after the displayed step.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Whether X plays next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Whether the move list is displayed newest first.
    pub fn reverse_order(&self) -> bool {
        self.reverse_order
    }

    /// The player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// The snapshot to render.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step_number].board
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        detect_win(self.current_board())
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winning_line() {
            GameStatus::Winner(line.player)
        } else if self.step_number == MAX_MOVES {
            GameStatus::Draw
        } else {
            GameStatus::NextTurn(self.next_player())
        }
    }

    /// Applies an action, reporting why it was refused.
    #[instrument(skip(self), fields(step = self.step_number, history_len = self.history.len()))]
    pub fn try_reduce(&self, action: Action) -> Result<Self, Rejection> {
        let next = match action {
            Action::Move(pos) => self.moved(pos)?,
            Action::Jump(step) => self.jumped(step)?,
            Action::Reset => Self::new(),
            Action::ToggleReverse => Self {
                reverse_order: !self.reverse_order,
                ..self.clone()
            },
        };

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(&next);

        Ok(next)
    }

    /// Applies an action; refused actions leave the state unchanged.
    pub fn reduce(&self, action: Action) -> Self {
        match self.try_reduce(action) {
            Ok(next) => next,
            Err(rejection) => {
                debug!(%action, %rejection, "Action rejected, state unchanged");
                self.clone()
            }
        }
    }

    /// Plays `pos` for the next player from the displayed step.
    pub fn apply_move(&self, pos: Position) -> Self {
        self.reduce(Action::Move(pos))
    }

    /// Displays a historical step.
    pub fn jump_to(&self, step: usize) -> Self {
        self.reduce(Action::Jump(step))
    }

    /// Starts over with a fresh state.
    pub fn reset(&self) -> Self {
        self.reduce(Action::Reset)
    }

    /// Flips the move list display order.
    pub fn toggle_reverse(&self) -> Self {
        self.reduce(Action::ToggleReverse)
    }

    fn moved(&self, pos: Position) -> Result<Self, Rejection> {
        let base = &self.history[..=self.step_number];
        let current = base[base.len() - 1].board;

        if let Some(line) = detect_win(&current) {
            return Err(Rejection::GameOver(line.player));
        }
        if !current.is_empty(pos) {
            return Err(Rejection::SquareOccupied(pos));
        }

        let player = self.next_player();
        let mut history = base.to_vec();
        history.push(HistoryEntry {
            board: current.with(pos, Square::Occupied(player)),
            location: Some(pos),
        });
        debug!(%player, position = %pos, discarded = self.history.len() - base.len(), "Move applied");

        Ok(Self {
            history,
            step_number: base.len(),
            x_is_next: !self.x_is_next,
            reverse_order: self.reverse_order,
        })
    }

    fn jumped(&self, step: usize) -> Result<Self, Rejection> {
        if step >= self.history.len() {
            return Err(Rejection::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(Self {
            step_number: step,
            x_is_next: step % 2 == 0,
            ..self.clone()
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    fn play(moves: &[Position]) -> GameState {
        moves
            .iter()
            .fold(GameState::new(), |state, pos| state.apply_move(*pos))
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.history(), &[HistoryEntry::start()]);
        assert_eq!(state.step_number(), 0);
        assert!(state.x_is_next());
        assert!(!state.reverse_order());
        assert_eq!(state.status(), GameStatus::NextTurn(Player::X));
    }

    #[test]
    fn test_move_appends_entry_and_flips_turn() {
        let state = GameState::new().apply_move(Center);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.step_number(), 1);
        assert!(!state.x_is_next());
        assert_eq!(state.history()[1].location, Some(Center));
        assert_eq!(state.current_board().get(Center), Square::Occupied(Player::X));
        assert_eq!(state.status(), GameStatus::NextTurn(Player::O));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let state = GameState::new().apply_move(Center);
        assert_eq!(
            state.try_reduce(Action::Move(Center)),
            Err(Rejection::SquareOccupied(Center))
        );
        assert_eq!(state.apply_move(Center), state);
    }

    #[test]
    fn test_move_on_won_board_rejected() {
        let state = play(&[TopLeft, Center, TopCenter, MiddleRight, TopRight]);
        assert_eq!(state.status(), GameStatus::Winner(Player::X));
        assert_eq!(
            state.try_reduce(Action::Move(BottomLeft)),
            Err(Rejection::GameOver(Player::X))
        );
        assert_eq!(state.apply_move(BottomLeft), state);
    }

    #[test]
    fn test_jump_sets_parity_and_keeps_history() {
        let state = play(&[TopLeft, Center, BottomRight]);
        let jumped = state.jump_to(1);
        assert_eq!(jumped.step_number(), 1);
        assert!(!jumped.x_is_next());
        assert_eq!(jumped.history(), state.history());
        assert_eq!(jumped.current_board(), &state.history()[1].board);

        let start = state.jump_to(0);
        assert!(start.x_is_next());
        assert_eq!(start.current_board(), &Board::new());
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let state = play(&[TopLeft]);
        assert_eq!(
            state.try_reduce(Action::Jump(2)),
            Err(Rejection::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(state.jump_to(2), state);
    }

    #[test]
    fn test_move_from_earlier_step_truncates_future() {
        let state = play(&[TopLeft, Center, BottomRight]).jump_to(1);
        let branched = state.apply_move(TopRight);
        assert_eq!(branched.history().len(), 3);
        assert_eq!(branched.step_number(), 2);
        assert_eq!(branched.history()[2].location, Some(TopRight));
        assert!(branched.current_board().is_empty(BottomRight));
        assert_eq!(
            branched.current_board().get(TopRight),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_rewinding_a_won_game_allows_play() {
        let won = play(&[TopLeft, Center, TopCenter, MiddleRight, TopRight]);
        let rewound = won.jump_to(4).apply_move(BottomLeft);
        assert_eq!(rewound.history().len(), 6);
        assert_eq!(rewound.status(), GameStatus::NextTurn(Player::O));
    }

    #[test]
    fn test_draw_at_ninth_move() {
        let state = play(&[
            TopLeft,
            TopCenter,
            TopRight,
            Center,
            MiddleLeft,
            MiddleRight,
            BottomCenter,
            BottomLeft,
            BottomRight,
        ]);
        assert_eq!(state.step_number(), MAX_MOVES);
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.status(), GameStatus::Draw);
        assert!(state.status().is_over());
    }

    #[test]
    fn test_toggle_reverse_only_flips_order() {
        let state = play(&[TopLeft, Center]);
        let toggled = state.toggle_reverse();
        assert!(toggled.reverse_order());
        assert_eq!(toggled.history(), state.history());
        assert_eq!(toggled.step_number(), state.step_number());
        assert_eq!(toggled.x_is_next(), state.x_is_next());
        assert_eq!(toggled.toggle_reverse(), state);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let state = play(&[TopLeft, Center, TopRight]).toggle_reverse().jump_to(1);
        assert_eq!(state.reset(), GameState::new());
    }

    #[test]
    fn test_state_serializes_history_and_step() {
        let json = serde_json::to_value(GameState::new().apply_move(Center)).unwrap();
        assert_eq!(json["step_number"], 1);
        assert_eq!(json["history"][1]["location"], "Center");
        assert_eq!(json["history"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(GameStatus::Draw.to_string(), "It's a draw");
        assert_eq!(GameStatus::NextTurn(Player::X).to_string(), "Next player: X");
    }
}
