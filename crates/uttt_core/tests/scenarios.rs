//! Scenario tests for the public game interface.

use uttt_core::{
    GameStatus, Move, MoveRejected, Player, Position, apply_move, game_status, legal_moves,
    new_game, select_automated_move,
};

fn mv(board: (u8, u8), cell: (u8, u8)) -> Move {
    Move::from_coords(board.0, board.1, cell.0, cell.1).expect("coordinates in range")
}

/// Plays moves in order, alternating from X.
fn play(moves: &[Move]) -> uttt_core::GameState {
    let mut state = new_game();
    for mov in moves {
        state = apply_move(&state, *mov, state.to_move()).expect("legal move");
    }
    state
}

/// X wins sub-board (0,0) on its main diagonal while O is bounced between
/// the center and bottom-right boards.
fn diagonal_win_line() -> Vec<Move> {
    vec![
        mv((0, 0), (1, 1)),
        mv((1, 1), (0, 0)),
        mv((0, 0), (2, 2)),
        mv((2, 2), (0, 0)),
        mv((0, 0), (0, 0)),
    ]
}

#[test]
fn test_center_opening_confines_reply() {
    let state = play(&[mv((1, 1), (1, 1))]);

    assert_eq!(
        game_status(&state),
        GameStatus::InProgress {
            to_move: Player::O,
            active_target: Some(Position::Center)
        }
    );
    let moves = legal_moves(&state);
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|m| m.board == Position::Center));

    let outside = apply_move(&state, mv((0, 0), (0, 0)), Player::O);
    assert_eq!(
        outside,
        Err(MoveRejected::WrongBoard {
            required: Position::Center,
            attempted: Position::TopLeft
        })
    );
}

#[test]
fn test_diagonal_wins_sub_board() {
    let state = play(&diagonal_win_line());
    let corner = state.board().sub_board(Position::TopLeft);
    assert_eq!(corner.winner(), Some(Player::X));
    assert!(state.board().winner().is_none());
}

#[test]
fn test_won_sub_board_rejects_further_marks() {
    let state = play(&diagonal_win_line());
    let before = state.board().sub_board(Position::TopLeft).clone();

    for cell in Position::ALL {
        let result = apply_move(&state, Move::new(Position::TopLeft, cell), Player::O);
        assert!(result.is_err(), "cell {cell} accepted");
    }
    assert_eq!(
        apply_move(&state, mv((0, 0), (1, 0)), Player::O),
        Err(MoveRejected::BoardClosed(Position::TopLeft))
    );
    assert_eq!(state.board().sub_board(Position::TopLeft), &before);
}

#[test]
fn test_sent_to_won_board_means_free_choice() {
    // The winning mark sits in cell (0,0), which points at the board it
    // just won.
    let state = play(&diagonal_win_line());
    assert_eq!(state.board().active_target(), None);
    assert_eq!(
        game_status(&state),
        GameStatus::InProgress {
            to_move: Player::O,
            active_target: None
        }
    );

    let moves = legal_moves(&state);
    assert!(moves.iter().all(|m| m.board != Position::TopLeft));
    let boards: std::collections::HashSet<_> = moves.iter().map(|m| m.board).collect();
    assert_eq!(boards.len(), 8);
}

#[test]
fn test_selector_takes_available_sub_board_win() {
    // O holds (1,0) and (1,1) of the center board and is sent there.
    let state = play(&[
        mv((0, 0), (1, 1)),
        mv((1, 1), (1, 0)),
        mv((1, 0), (1, 1)),
        mv((1, 1), (1, 1)),
        mv((1, 1), (0, 0)),
        mv((0, 0), (2, 2)),
        mv((2, 2), (1, 1)),
    ]);
    assert_eq!(state.to_move(), Player::O);
    assert_eq!(state.board().active_target(), Some(Position::Center));

    let choice = select_automated_move(&state).expect("a move exists");
    assert_eq!(choice, mv((1, 1), (1, 2)));

    let after = apply_move(&state, choice, Player::O).unwrap();
    assert_eq!(
        after.board().sub_board(Position::Center).winner(),
        Some(Player::O)
    );
}

#[test]
fn test_selector_is_reproducible() {
    let state = play(&[mv((2, 0), (0, 2)), mv((0, 2), (2, 0))]);
    let first = select_automated_move(&state);
    let second = select_automated_move(&state.clone());
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_out_of_turn_move_rejected() {
    let state = new_game();
    assert_eq!(
        apply_move(&state, mv((1, 1), (1, 1)), Player::O),
        Err(MoveRejected::NotYourTurn(Player::O))
    );
}

#[test]
fn test_status_serializes() {
    let state = play(&[mv((1, 1), (0, 2))]);
    let json = serde_json::to_value(game_status(&state)).unwrap();
    assert_eq!(json["InProgress"]["to_move"], "O");
    assert_eq!(json["InProgress"]["active_target"], "BottomLeft");
}
