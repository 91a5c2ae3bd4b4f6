//! Terminal ownership and the event loop.

use super::screens;
use super::state::AppState;
use crate::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;

/// TUI application: the state plus the terminal it is drawn on
pub struct TuiApp {
    /// Application state
    state: AppState,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    /// Take over the terminal
    pub fn new(state: AppState) -> Result<Self> {
        enable_raw_mode()?;
        let terminal = undo_on_error(Self::enter_terminal, || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;
        Ok(Self { state, terminal })
    }

    fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Run the event loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        loop {
            let state = &self.state;
            self.terminal.draw(|frame| screens::draw(frame, state))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.state.handle_key(key);
                    }
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Final state, e.g. for reporting results after exit
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Run `setup`, calling `undo` only if it fails
fn undo_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    setup().map_err(|e| {
        undo();
        e
    })
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
