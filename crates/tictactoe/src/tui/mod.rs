//! Terminal UI for tic-tac-toe

pub mod app;
pub mod input;
pub mod ui;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::audio::Audio;
use app::App;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Restores the terminal when dropped.
///
/// Created as soon as raw mode is on, so a failed setup step, an error from
/// the game loop and a panic unwinding through [`run`] all leave the
/// terminal usable.
#[derive(Debug)]
pub struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    /// Arms a guard that calls `restore` on drop.
    pub fn new(restore: fn() -> io::Result<()>) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = (self.restore)() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode, the alternate screen and mouse capture.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
}

// Restore before the default hook prints, or the message lands on the
// alternate screen and is lost.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        hook(info);
    }));
}

/// Runs the game until the user quits.
///
/// The terminal is restored before returning, whether the loop ended
/// normally or with an error, and before a panic message is printed.
pub fn run(audio: Audio) -> Result<()> {
    info!("Starting tic-tac-toe TUI");
    install_panic_hook();

    enable_raw_mode()?;
    let _guard = TerminalGuard::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let size = terminal.size()?;
    let mut app = App::new(audio, Rect::new(0, 0, size.width, size.height));
    let res = run_loop(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = %app.engine().scores(), "Session ended");
    res
}

/// Draws and dispatches events until the app asks to quit.
#[instrument(skip_all)]
pub fn run_loop<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        let completed = terminal.draw(|frame| ui::draw(frame, app))?;
        app.set_viewport(completed.area);

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            app.handle_event(&event);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static RESTORES: Cell<usize> = const { Cell::new(0) };
    }

    fn count_restore() -> io::Result<()> {
        RESTORES.with(|n| n.set(n.get() + 1));
        Ok(())
    }

    fn failing_restore() -> io::Result<()> {
        Err(io::Error::other("not a terminal"))
    }

    fn restores() -> usize {
        RESTORES.with(Cell::get)
    }

    fn setup(fail: bool) -> io::Result<()> {
        let _guard = TerminalGuard::new(count_restore);
        if fail {
            return Err(io::Error::other("alternate screen unavailable"));
        }
        Ok(())
    }

    #[test]
    fn test_guard_restores_after_failed_setup() {
        let before = restores();
        assert!(setup(true).is_err());
        assert_eq!(restores(), before + 1);
        assert!(setup(false).is_ok());
        assert_eq!(restores(), before + 2);
    }

    #[test]
    fn test_guard_restores_during_panic() {
        let before = restores();
        let result: std::thread::Result<()> = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard::new(count_restore);
            panic!("round invariants violated");
        });
        assert!(result.is_err());
        assert_eq!(restores(), before + 1);
    }

    #[test]
    fn test_failed_restore_does_not_panic() {
        drop(TerminalGuard::new(failing_restore));
    }
}
