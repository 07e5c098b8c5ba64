//! Raw mode and alternate screen lifetime.

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Holds the terminal in raw mode on the alternate screen. Restores on drop.
///
/// Raw mode is switched on before the guard exists, everything after that is
/// covered: a failed screen switch, an error from the game loop and unwinding
/// all pass through [`Drop`].
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enables raw mode and enters the alternate screen.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen)?;
        debug!("Terminal switched to raw mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore();
    }
}

/// Chains a panic hook that restores the terminal before the message prints.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

/// Undoes [`TerminalGuard::enter`]. Returns how many steps failed.
pub fn restore() -> usize {
    run_restore(disable_raw_mode, || {
        execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
    })
}

// Both steps run even when the first one fails.
fn run_restore(
    disable_raw: impl FnOnce() -> io::Result<()>,
    leave_screen: impl FnOnce() -> io::Result<()>,
) -> usize {
    [
        ("disable raw mode", disable_raw()),
        ("leave alternate screen", leave_screen()),
    ]
    .into_iter()
    .filter_map(|(step, result)| result.err().map(|err| (step, err)))
    .inspect(|(step, err)| warn!(step = *step, error = %err, "Terminal restore step failed"))
    .count()
}
