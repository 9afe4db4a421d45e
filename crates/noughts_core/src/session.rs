//! Session orchestration: mode, turn sequencing, and the deferred
//! computer move.
//!
//! A [`Session`] is the single mutable object of the core. The board
//! result is never stored; it is recomputed from the board on demand.
//! The computer's delayed move is modeled as a generation token: the
//! frontend schedules a timer holding the token, and a stale token is
//! dropped at fire time.

use crate::rules::{self, IllegalMove};
use crate::select;
use crate::types::{Board, GameResult, Mark, Mode};
use tracing::{debug, info, instrument, warn};

/// A running game: board, turn, mode, and the pending-move window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    turn: Mark,
    mode: Mode,
    /// True while a scheduled computer move has not yet resolved.
    pending: bool,
    /// Bumped on every reset; stale scheduled moves carry an old value.
    generation: u64,
}

impl Session {
    /// Creates a fresh session: empty board, X to move, player-vs-player.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            mode: Mode::PlayerVsPlayer,
            pending: false,
            generation: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True while a computer move is scheduled but not yet applied.
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Current generation; scheduled moves must present it to apply.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Derives the result from the board.
    pub fn result(&self) -> GameResult {
        rules::compute_result(&self.board)
    }

    /// Resets board and turn in place; mode survives.
    ///
    /// Any scheduled computer move is cancelled: the generation bump
    /// invalidates its token.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(mode = self.mode.name(), "Restarting game");
        self.board = Board::new();
        self.turn = Mark::X;
        self.pending = false;
        self.generation += 1;
    }

    /// Switches mode, restarting on an actual change.
    ///
    /// Selecting the current mode is a no-op.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            debug!(mode = mode.name(), "Mode unchanged");
            return;
        }
        info!(from = self.mode.name(), to = mode.name(), "Switching mode");
        self.mode = mode;
        self.restart();
    }

    /// Whether a human click on `pos` may be accepted right now.
    ///
    /// Requires an ongoing game, an empty square, a human-eligible turn
    /// (in computer mode the human is always X), and no pending
    /// computer move. The frontend gates its input handler on this;
    /// a false here means any move attempt would be rejected.
    pub fn is_cell_playable(&self, pos: usize) -> bool {
        if self.pending || !self.board.is_empty(pos) || self.result().is_over() {
            return false;
        }
        match self.mode {
            Mode::PlayerVsPlayer => true,
            Mode::PlayerVsComputer => self.turn == Mark::X,
        }
    }

    /// Applies a human move at `pos` and flips the turn.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] during the pending window, on a
    /// computer-owned turn, or when [`rules::apply_move`] rejects the
    /// position. The session is untouched on failure.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, pos: usize) -> Result<(), IllegalMove> {
        if self.pending {
            warn!(pos, "Move rejected: computer move pending");
            return Err(IllegalMove::MovePending);
        }
        if self.mode == Mode::PlayerVsComputer && self.turn != Mark::X {
            warn!(pos, turn = %self.turn, "Move rejected: not the human's turn");
            return Err(IllegalMove::OutOfTurn(self.turn));
        }

        self.board = rules::apply_move(&self.board, self.turn, pos).inspect_err(|e| {
            warn!(pos, error = %e, "Move rejected");
        })?;
        self.turn = self.turn.opponent();

        info!(pos, turn = %self.turn, result = ?self.result(), "Human move applied");
        Ok(())
    }

    /// Opens the computer's thinking window if its move is due.
    ///
    /// Returns the generation token the scheduled task must hand back
    /// to [`Session::computer_move_if_due`]. Returns `None` when the
    /// computer has nothing to do (wrong mode, wrong turn, game over,
    /// or a move already pending).
    #[instrument(skip(self))]
    pub fn begin_computer_turn(&mut self) -> Option<u64> {
        if self.pending
            || self.mode != Mode::PlayerVsComputer
            || self.turn != Mark::O
            || self.result().is_over()
        {
            return None;
        }
        debug!(generation = self.generation, "Computer is thinking");
        self.pending = true;
        Some(self.generation)
    }

    /// Resolves a scheduled computer move.
    ///
    /// Applies a randomly selected move and hands the turn back to X,
    /// but only if `token` still matches the current generation and the
    /// triggering conditions hold. A stale token (restart or mode
    /// switch since scheduling) is dropped without touching the board.
    /// Returns whether a move was applied.
    #[instrument(skip(self))]
    pub fn computer_move_if_due(&mut self, token: u64) -> bool {
        if token != self.generation {
            debug!(token, generation = self.generation, "Stale computer move dropped");
            return false;
        }
        if !self.pending
            || self.mode != Mode::PlayerVsComputer
            || self.turn != Mark::O
            || self.result().is_over()
        {
            debug!("Computer move no longer due");
            self.pending = false;
            return false;
        }

        let Some(pos) = select::select_move(&self.board) else {
            // Unreachable with an ongoing result; recover by closing the window.
            warn!("No legal move on an ongoing board");
            self.pending = false;
            return false;
        };

        match rules::apply_move(&self.board, Mark::O, pos) {
            Ok(board) => {
                self.board = board;
                self.turn = Mark::X;
                self.pending = false;
                info!(pos, result = ?self.result(), "Computer move applied");
                true
            }
            Err(e) => {
                // Selector only returns empty squares, so this is a bug upstream.
                warn!(pos, error = %e, "Selected computer move was rejected");
                self.pending = false;
                false
            }
        }
    }

    /// Derives the status line from `(result, mode, turn)`.
    pub fn status_text(&self) -> String {
        status_text(self.result(), self.mode, self.turn)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Status message for the given result, mode, and turn.
///
/// Pure presentation text layered on [`GameResult`]; kept here so the
/// frontend never invents its own reading of the state.
pub fn status_text(result: GameResult, mode: Mode, turn: Mark) -> String {
    match (result, mode) {
        (GameResult::Draw, _) => "It's a draw!".to_string(),
        (GameResult::Won { mark, .. }, Mode::PlayerVsComputer) => match mark {
            Mark::X => "You win!".to_string(),
            Mark::O => "The computer wins!".to_string(),
        },
        (GameResult::Won { mark, .. }, Mode::PlayerVsPlayer) => {
            format!("Player {} wins!", mark)
        }
        (GameResult::Ongoing, Mode::PlayerVsComputer) => match turn {
            Mark::X => "Your turn.".to_string(),
            Mark::O => "The computer is thinking...".to_string(),
        },
        (GameResult::Ongoing, Mode::PlayerVsPlayer) => {
            format!("Player {}'s turn.", turn)
        }
    }
}
