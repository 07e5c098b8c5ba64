//! Application state and logic.

use super::input::{self, Command, Focus};
use crossterm::event::KeyCode;
use tictactoe_timeline::{Action, Effect, GameState, GameView, Position, on_mount, on_state_change};
use tracing::{debug, info};

/// Main application state.
///
/// Owns the single [`GameState`] plus the cursors, which are presentation
/// only and never reach the reducer.
#[derive(Debug)]
pub struct App {
    state: GameState,
    board_cursor: Position,
    moves_cursor: usize,
    scroll_anchor: usize,
    focus: Focus,
    should_quit: bool,
}

impl App {
    /// Creates a new application and runs the mount effects.
    pub fn new() -> Self {
        let mut app = Self {
            state: GameState::new(),
            board_cursor: Position::Center,
            moves_cursor: 0,
            scroll_anchor: 0,
            focus: Focus::Board,
            should_quit: false,
        };
        let effects = on_mount(&app.state);
        app.run_effects(&effects);
        app
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Projects the current state for rendering.
    pub fn view(&self) -> GameView {
        GameView::project(&self.state)
    }

    /// Board cell under the keyboard cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Move list row under the keyboard cursor.
    pub fn moves_cursor(&self) -> usize {
        self.moves_cursor
    }

    /// Move list row the viewport must keep visible.
    pub fn scroll_anchor(&self) -> usize {
        self.scroll_anchor
    }

    /// Panel receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(command) = input::command_for(key) {
            self.apply(command);
        }
    }

    /// Executes a command.
    pub fn apply(&mut self, command: Command) {
        debug!(?command, focus = ?self.focus, "Applying command");

        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::Dispatch(action) => self.dispatch(action),
            Command::SwitchFocus => self.focus = self.focus.toggled(),
            Command::MoveCursor(key) => match self.focus {
                Focus::Board => self.board_cursor = input::move_cursor(self.board_cursor, key),
                Focus::Moves => {
                    self.moves_cursor =
                        input::move_row(self.moves_cursor, key, self.state.history().len());
                    self.scroll_anchor = self.moves_cursor;
                }
            },
            Command::ActivateCursor => {
                let action = match self.focus {
                    Focus::Board => Action::Move(self.board_cursor),
                    Focus::Moves => Action::Jump(self.step_at_row(self.moves_cursor)),
                };
                self.dispatch(action);
            }
        }
    }

    /// Sends an action through the reducer and runs the resulting effects.
    pub fn dispatch(&mut self, action: Action) {
        let selected_step = self.step_at_row(self.moves_cursor);
        let next = self.state.reduce(action);
        let effects = on_state_change(&self.state, &next);
        self.state = next;

        // New moves and resets put the cursor on the displayed step; otherwise
        // it stays on the same step when rows reorder.
        let cursor_step = match action {
            Action::Move(_) | Action::Reset => self.state.step_number(),
            Action::Jump(_) | Action::ToggleReverse => selected_step,
        };
        self.moves_cursor = self.row_of_step(cursor_step);
        self.run_effects(&effects);
    }

    fn run_effects(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::ScrollToLatest => self.scroll_anchor = self.view().latest_row(),
            }
        }
    }

    fn step_at_row(&self, row: usize) -> usize {
        let len = self.state.history().len();
        let row = row.min(len - 1);
        if self.state.reverse_order() {
            len - 1 - row
        } else {
            row
        }
    }

    fn row_of_step(&self, step: usize) -> usize {
        // Rows and steps are mirror images in reverse order.
        self.step_at_row(step)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_timeline::{GameStatus, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        assert_eq!(app.state().history().len(), 3);
        assert_eq!(app.state().status(), GameStatus::NextTurn(Player::X));
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.state().history()[1].location, Some(Position::TopLeft));
    }

    #[test]
    fn test_moves_cursor_follows_latest() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('3')]);
        assert_eq!(app.moves_cursor(), 3);
    }

    #[test]
    fn test_jump_from_move_list() {
        let mut app = App::new();
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('2'),
                KeyCode::Tab,
                KeyCode::Up,
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.state().step_number(), 1);
        assert!(!app.state().x_is_next());
    }

    #[test]
    fn test_reverse_keeps_selected_step() {
        let mut app = App::new();
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('2'),
                KeyCode::Char('3'),
                KeyCode::Tab,
                KeyCode::Up,
            ],
        );
        assert_eq!(app.moves_cursor(), 2);

        press(&mut app, &[KeyCode::Char('s')]);
        assert!(app.state().reverse_order());
        // Step 2 is the second row when newest is first.
        assert_eq!(app.moves_cursor(), 1);

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.state().step_number(), 2);
    }

    #[test]
    fn test_walk_back_one_step_at_a_time() {
        let mut app = App::new();
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('2'),
                KeyCode::Char('3'),
                KeyCode::Tab,
                KeyCode::Up,
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.state().step_number(), 2);
        assert_eq!(app.moves_cursor(), 2);
        // The viewport still follows the newest entry.
        assert_eq!(app.scroll_anchor(), 3);

        press(&mut app, &[KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.state().step_number(), 1);
        assert_eq!(app.moves_cursor(), 1);
    }

    #[test]
    fn test_unsort_keeps_selected_step() {
        let mut app = App::new();
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('2'),
                KeyCode::Char('3'),
                KeyCode::Tab,
                KeyCode::Char('s'),
                KeyCode::Down,
            ],
        );
        // Newest first: row 1 is step 2.
        assert_eq!(app.moves_cursor(), 1);

        press(&mut app, &[KeyCode::Char('s')]);
        assert!(!app.state().reverse_order());
        assert_eq!(app.moves_cursor(), 2);
        assert_eq!(app.scroll_anchor(), 3);
    }

    #[test]
    fn test_reverse_order_does_not_move_viewport() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('s'), KeyCode::Tab, KeyCode::Down]);
        assert_eq!(app.scroll_anchor(), 1);

        press(&mut app, &[KeyCode::Char('5')]);
        assert_eq!(app.scroll_anchor(), 1);
        // The new move is the top row when newest is first.
        assert_eq!(app.moves_cursor(), 0);
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('s'), KeyCode::Char('n')]);
        assert_eq!(app.state(), &GameState::new());
        assert_eq!(app.moves_cursor(), 0);

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
