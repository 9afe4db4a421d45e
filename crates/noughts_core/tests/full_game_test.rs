//! End-to-end games played through the session.

use noughts_core::{GameResult, Mark, Mode, Session, Square};

#[test]
fn test_x_wins_top_row() {
    let mut session = Session::new();
    // X: 0, O: 4, X: 1, O: 7, X: 2.
    for pos in [0, 4, 1, 7, 2] {
        session.human_move(pos).unwrap();
    }

    assert_eq!(
        session.result(),
        GameResult::Won {
            mark: Mark::X,
            line: [0, 1, 2]
        }
    );
}

#[test]
fn test_full_board_with_no_line_is_a_draw() {
    let mut session = Session::new();
    // X:4, O:1, X:0, O:8, X:2, O:6, X:7, O:3, X:5 ends at
    // X O X / O X X / O X O with no three in a row.
    for pos in [4, 1, 0, 8, 2, 6, 7, 3, 5] {
        assert_eq!(session.result(), GameResult::Ongoing);
        session.human_move(pos).unwrap();
    }

    assert_eq!(session.result(), GameResult::Draw);
}

#[test]
fn test_computer_game_runs_to_completion() {
    let mut session = Session::new();
    session.set_mode(Mode::PlayerVsComputer);

    // Drive a whole game: the human plays the first empty square, the
    // computer answers at random. Alternation and the playability gate
    // must hold at every step.
    while !session.result().is_over() {
        let pos = (0..9)
            .find(|&p| session.is_cell_playable(p))
            .expect("ongoing game must offer a playable square");
        session.human_move(pos).unwrap();

        if let Some(token) = session.begin_computer_turn() {
            assert!(session.pending());
            assert!(session.computer_move_if_due(token));
            assert_eq!(session.turn(), Mark::X);
        }
    }

    // Marks alternate from X, so X never trails and leads by at most one.
    let xs = session
        .board()
        .squares()
        .iter()
        .filter(|&&s| s == Square::Occupied(Mark::X))
        .count();
    let os = session
        .board()
        .squares()
        .iter()
        .filter(|&&s| s == Square::Occupied(Mark::O))
        .count();
    assert!(xs == os || xs == os + 1, "bad mark balance: {xs} X vs {os} O");
}

#[test]
fn test_winning_line_matches_board() {
    let mut session = Session::new();
    // O takes the left column: X:1, O:0, X:2, O:3, X:7, O:6.
    for pos in [1, 0, 2, 3, 7, 6] {
        session.human_move(pos).unwrap();
    }

    match session.result() {
        GameResult::Won { mark, line } => {
            assert_eq!(mark, Mark::O);
            assert_eq!(line, [0, 3, 6]);
            for pos in line {
                assert_eq!(session.board().get(pos), Some(Square::Occupied(mark)));
            }
        }
        other => panic!("expected a win, got {other:?}"),
    }
}
