//! Pure tic-tac-toe game core.
//!
//! # Architecture
//!
//! - **Types**: board, marks, winning lines, derived results
//! - **Rules**: pure move application and result derivation
//! - **Select**: uniform-random computer opponent
//! - **Session**: mode, turn sequencing, and the deferred computer move
//!
//! The core holds no renderer, no timer, and no I/O. A frontend owns a
//! [`Session`], applies human moves through it, and schedules the
//! computer's delayed move with the generation token returned by
//! [`Session::begin_computer_turn`].
//!
//! # Example
//!
//! ```
//! use noughts_core::{Mode, Session};
//!
//! let mut session = Session::new();
//! session.set_mode(Mode::PlayerVsComputer);
//! session.human_move(4).unwrap();
//!
//! if let Some(token) = session.begin_computer_turn() {
//!     // A real frontend fires this from a 500ms timer.
//!     assert!(session.computer_move_if_due(token));
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod rules;
mod select;
mod session;
mod types;

pub use rules::{IllegalMove, apply_move, compute_result};
pub use select::{select_move, select_move_with};
pub use session::{Session, status_text};
pub use types::{Board, GameResult, Line, Mark, Mode, Square, WINNING_LINES};
