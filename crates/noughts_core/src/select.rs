//! Computer opponent move selection.
//!
//! Intentionally naive: a uniform-random pick among the empty squares,
//! with no look-ahead and no blocking. Strength is a non-goal.

use super::types::Board;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::instrument;

/// Picks a move for the computer using the thread RNG.
///
/// Returns `None` only on a full board, which a caller checking the
/// result first never hits.
#[instrument]
pub fn select_move(board: &Board) -> Option<usize> {
    select_move_with(board, &mut rand::thread_rng())
}

/// Picks a uniform-random empty position using the supplied RNG.
pub fn select_move_with<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_positions().choose(rng).copied()
}
