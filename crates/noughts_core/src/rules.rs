//! Move application and result derivation.
//!
//! Both operations are pure: they read a board and return a value
//! without touching the input. Turn alternation belongs to the caller
//! (see [`crate::Session`]).

use super::types::{Board, GameResult, Mark, Square, WINNING_LINES};
use tracing::instrument;

/// Why a move was rejected.
///
/// The single error kind of the core. Callers are expected to prevent
/// rejections via [`crate::Session::is_cell_playable`] rather than
/// recover from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,

    /// The mark does not own the current turn.
    #[display("It's not {}'s turn", _0)]
    OutOfTurn(Mark),

    /// A computer move is pending; human input is locked out.
    #[display("Waiting for the computer to move")]
    MovePending,
}

impl std::error::Error for IllegalMove {}

/// Derives the game result from the board alone.
///
/// Scans the 8 winning lines in fixed order and reports the first
/// fully-uniform one. A full board with no winner is a draw.
#[instrument]
pub fn compute_result(board: &Board) -> GameResult {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(Square::Occupied(mark)) = board.get(a) {
            if board.get(b) == Some(Square::Occupied(mark))
                && board.get(c) == Some(Square::Occupied(mark))
            {
                return GameResult::Won { mark, line };
            }
        }
    }

    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::Ongoing
    }
}

/// Places `mark` at `pos`, returning the new board.
///
/// The input board is untouched; on success the returned board differs
/// from it at exactly `pos`.
///
/// # Errors
///
/// Returns [`IllegalMove`] when the index is out of range, the square
/// is occupied, or the game is already over.
#[instrument]
pub fn apply_move(board: &Board, mark: Mark, pos: usize) -> Result<Board, IllegalMove> {
    if pos >= 9 {
        return Err(IllegalMove::OutOfBounds(pos));
    }
    if !board.is_empty(pos) {
        return Err(IllegalMove::SquareOccupied(pos));
    }
    if compute_result(board).is_over() {
        return Err(IllegalMove::GameOver);
    }

    let mut next = *board;
    next.set(pos, Square::Occupied(mark))
        .map_err(|_| IllegalMove::OutOfBounds(pos))?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(moves: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(pos, mark) in moves {
            board.set(pos, Square::Occupied(mark)).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_ongoing() {
        assert_eq!(compute_result(&Board::new()), GameResult::Ongoing);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert_eq!(
            compute_result(&board),
            GameResult::Won {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_winner_column() {
        let board = board_from(&[(1, Mark::O), (4, Mark::O), (7, Mark::O)]);
        assert_eq!(
            compute_result(&board),
            GameResult::Won {
                mark: Mark::O,
                line: [1, 4, 7]
            }
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_from(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        assert_eq!(
            compute_result(&board),
            GameResult::Won {
                mark: Mark::O,
                line: [2, 4, 6]
            }
        );
    }

    #[test]
    fn test_first_line_reported_when_two_complete() {
        // Not reachable through legal play, but the tie-break is fixed:
        // the numerically-first line wins.
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);
        // Both [0,1,2] and [0,3,6] are complete; [0,1,2] comes first.
        assert_eq!(
            compute_result(&board),
            GameResult::Won {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_draw_on_full_board() {
        // X O X / O X X / O X O - no three in a row.
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::X),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::O),
        ]);
        assert_eq!(compute_result(&board), GameResult::Draw);
    }

    #[test]
    fn test_partial_board_ongoing() {
        let board = board_from(&[(0, Mark::X), (4, Mark::O)]);
        assert_eq!(compute_result(&board), GameResult::Ongoing);
    }

    #[test]
    fn test_apply_move_returns_new_board() {
        let board = Board::new();
        let next = apply_move(&board, Mark::X, 4).unwrap();

        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Square::Occupied(Mark::X)));
        for pos in (0..9).filter(|&p| p != 4) {
            assert_eq!(next.get(pos), board.get(pos));
        }
    }

    #[test]
    fn test_apply_move_rejects_occupied_square() {
        let board = board_from(&[(4, Mark::X)]);
        assert_eq!(
            apply_move(&board, Mark::O, 4),
            Err(IllegalMove::SquareOccupied(4))
        );
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            apply_move(&board, Mark::X, 9),
            Err(IllegalMove::OutOfBounds(9))
        );
    }

    #[test]
    fn test_apply_move_rejects_finished_game() {
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::O),
        ]);
        assert_eq!(apply_move(&board, Mark::O, 5), Err(IllegalMove::GameOver));
    }
}
