//! End-to-end properties of the history state machine.

use strictly_timetravel::{
    Board, GameState, GameStatus, HistoryErrorKind, MoveOutcome, Player, Position, Rejection,
    SortOrder, detect_winner, initial_state, project_history,
};
use Position::*;

fn play(moves: &[Position]) -> GameState {
    GameState::replay(moves).expect("legal moves")
}

#[test]
fn test_detect_winner_top_row() {
    // X X X / O O _ / _ _ _
    let state = play(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]);
    let line = detect_winner(state.current_board()).expect("winner");
    assert_eq!(line.indices(), [0, 1, 2]);
    assert_eq!(line.player(), Player::X);
}

#[test]
fn test_no_winner_before_fifth_move() {
    let state = play(&[TopLeft, MiddleLeft, TopCenter, Center]);
    for step in 0..state.history().len() {
        assert!(detect_winner(state.history()[step].board()).is_none());
    }
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let state = play(&[Center, TopLeft]);
    let snapshot = state.clone();
    assert_eq!(
        state.apply_move(TopLeft),
        MoveOutcome::Rejected(Rejection::SquareOccupied(TopLeft))
    );
    assert_eq!(state, snapshot);
}

#[test]
fn test_move_after_win_rejected() {
    let state = play(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]);
    for pos in Position::valid_moves(state.current_board()) {
        assert_eq!(state.apply_move(pos).rejection(), Some(Rejection::GameOver));
    }
}

#[test]
fn test_nine_moves_draw() {
    // X O X / X O O / O X X
    let state = play(&[
        TopLeft,
        TopCenter,
        TopRight,
        Center,
        MiddleLeft,
        MiddleRight,
        BottomCenter,
        BottomLeft,
        BottomRight,
    ]);
    assert_eq!(state.history().len(), 10);
    assert_eq!(detect_winner(state.current_board()), None);
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.status().to_string(), "No player win!");
}

#[test]
fn test_jump_to_zero_restores_opening() {
    let state = play(&[Center, TopLeft, BottomRight]);
    let opening = state.jump_to(0).expect("in range");
    assert_eq!(opening.next_player(), Player::X);
    assert_eq!(opening.current_board(), &Board::new());
    assert_eq!(opening.history(), state.history());
}

#[test]
fn test_move_after_jump_truncates() {
    let state = play(&[TopLeft, Center, TopRight, BottomLeft, MiddleRight]);
    assert_eq!(state.history().len(), 6);
    let state = state.jump_to(2).expect("in range");
    let state = state.apply_move(BottomCenter).accepted().expect("accepted");
    assert_eq!(state.history().len(), 4);
}

#[test]
fn test_jump_out_of_range_is_an_error() {
    let state = initial_state();
    let err = state.jump_to(1).expect_err("out of range");
    assert_eq!(err.kind(), &HistoryErrorKind::OutOfRange { step: 1, len: 1 });
}

#[test]
fn test_descending_projection_is_reverse() {
    let state = play(&[Center, TopLeft, BottomRight]).jump_to(2).expect("in range");
    let ascending = project_history(&state, SortOrder::Ascending);
    let mut descending = project_history(&state, SortOrder::Descending);
    descending.reverse();
    assert_eq!(ascending, descending);
}

#[test]
fn test_jump_back_undoes_visible_effect() {
    let state = play(&[Center, TopLeft]);
    for pos in state.valid_moves() {
        let MoveOutcome::Accepted(next) = state.apply_move(pos) else {
            panic!("{pos} should be playable");
        };
        let back = next.jump_to(state.current_step()).expect("in range");
        assert_eq!(back.current_board(), state.current_board());
        assert_eq!(back.next_player(), state.next_player());
        // The move is still recorded.
        assert_eq!(back.history().len(), state.history().len() + 1);
    }
}

#[test]
fn test_jump_then_win_then_jump_forward_again() {
    let state = play(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]);
    assert!(state.status().is_over());
    let rewound = state.jump_to(4).expect("in range");
    assert_eq!(rewound.status(), GameStatus::InProgress { next_player: Player::X });
    let forward = rewound.jump_to(5).expect("in range");
    assert_eq!(forward.status().winner(), Some(Player::X));
}
