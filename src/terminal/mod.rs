//! Raw-mode terminal lifecycle for the interactive form.
//!
//! ```no_run
//! use jobbot::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut screen = TerminalManager::new()?;
//!     screen.terminal().draw(|_frame| {})?;
//!     Ok(())
//! } // main screen back here
//! ```

mod setup;

pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode, setup_panic_hook};

use std::io::{self, Stdout};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};

pub type FormTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Leaves TUI mode once, on [`TerminalGuard::cleanup`] or drop.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn cleanup(&mut self) {
        if std::mem::replace(&mut self.active, false) {
            leave_tui_mode(&mut io::stdout());
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Raw mode, alternate screen and bracketed paste for as long as it lives.
pub struct TerminalManager {
    terminal: FormTerminal,
    guard: TerminalGuard,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        // Armed before entering so a failed enter still leaves raw mode
        let guard = TerminalGuard { active: true };

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut FormTerminal {
        &mut self.terminal
    }

    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
