//! Application state and input handling.

use noughts_core::{Mode, Session};
use strum::IntoEnumIterator;
use tracing::debug;

/// Main application state: the game session plus UI bookkeeping.
pub struct App {
    session: Session,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    ///
    /// Returns a generation token when the computer's thinking window
    /// opened; the caller schedules the delayed move for it.
    pub fn handle_key(&mut self, key: char) -> Option<u64> {
        match key {
            'q' => {
                self.should_quit = true;
                None
            }
            'r' => {
                debug!("Restart requested");
                self.session.restart();
                None
            }
            'm' => {
                // Cycle to the mode after the current one.
                let next = Mode::iter()
                    .cycle()
                    .skip_while(|&m| m != self.session.mode())
                    .nth(1)
                    .expect("mode cycle is infinite");
                debug!(mode = next.name(), "Mode toggle requested");
                self.session.set_mode(next);
                None
            }
            '1'..='9' => {
                let pos = key as usize - '1' as usize;
                self.place(pos)
            }
            _ => None,
        }
    }

    /// Attempts a human move; rejected clicks are silent no-ops.
    fn place(&mut self, pos: usize) -> Option<u64> {
        if !self.session.is_cell_playable(pos) {
            debug!(pos, "Ignoring unplayable square");
            return None;
        }
        if let Err(e) = self.session.human_move(pos) {
            // The gate above makes this unreachable; log and move on.
            debug!(pos, error = %e, "Move rejected");
            return None;
        }
        self.session.begin_computer_turn()
    }

    /// Resolves a scheduled computer move; stale tokens are dropped.
    pub fn computer_move_due(&mut self, token: u64) {
        debug!(token, "Computer move timer fired");
        self.session.computer_move_if_due(token);
    }
}
