//! Tests for move rules and status evaluation over reachable positions.

use tictactoe::{
    Board, GameState, GameStatus, IllegalMoveError, Mode, Player, compute_status, winner_for,
};

fn parse(json: &str) -> Board {
    serde_json::from_str(json).expect("valid board")
}

/// Visits every state reachable from the fresh game.
fn for_each_reachable(state: &GameState, depth: usize, visit: &mut impl FnMut(&GameState, usize)) {
    visit(state, depth);
    for index in state.legal_moves() {
        let next = state
            .clone()
            .with_move(index, state.current_player())
            .expect("legal move");
        for_each_reachable(&next, depth + 1, visit);
    }
}

#[test]
fn test_scenario_completing_top_row_wins() {
    let board = parse(r#"["X","X","","","O","O","","",""]"#);
    let state = GameState::from_board(board, Mode::TwoPlayer);
    assert_eq!(state.current_player(), Player::X);

    let state = state.with_move(2, Player::X).expect("legal move");
    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert_eq!(state.status().message(), "X wins!");
}

#[test]
fn test_scenario_full_board_without_line_is_draw() {
    let board = parse(r#"["X","O","X","O","X","O","O","X","O"]"#);
    assert_eq!(compute_status(&board), GameStatus::Draw);
    assert_eq!(compute_status(&board).message(), "It's a draw!");
}

#[test]
fn test_board_serializes_as_string_array() {
    let state = GameState::replay(Mode::TwoPlayer, &[4, 0]).unwrap();
    let json = serde_json::to_string(state.board()).unwrap();
    assert_eq!(json, r#"["O","","","","X","","","",""]"#);
}

#[test]
fn test_bad_board_json_rejected() {
    assert!(serde_json::from_str::<Board>(r#"["X","Y","","","","","","",""]"#).is_err());
    assert!(serde_json::from_str::<Board>(r#"["X",""]"#).is_err());
}

#[test]
fn test_reachable_states_never_have_two_winners() {
    let mut count = 0;
    for_each_reachable(&GameState::default(), 0, &mut |state, _| {
        count += 1;
        let board = state.board();
        assert!(!(winner_for(board, Player::X) && winner_for(board, Player::O)));
        assert_eq!(compute_status(board), compute_status(board));
        assert_eq!(compute_status(board), state.status());
    });
    // Distinct move sequences, including transpositions.
    assert_eq!(count, 549_946);
}

#[test]
fn test_every_game_ends_within_nine_moves() {
    for_each_reachable(&GameState::default(), 0, &mut |state, depth| {
        assert!(depth <= 9);
        assert_eq!(state.history().len(), depth);
        if state.legal_moves().is_empty() {
            assert!(state.is_over());
        }
    });
}

#[test]
fn test_occupied_square_rejected_without_change() {
    let mut state = GameState::replay(Mode::TwoPlayer, &[4]).unwrap();
    let before = state.clone();
    assert_eq!(
        state.apply_move(4, Player::O),
        Err(IllegalMoveError::SquareOccupied(4))
    );
    assert_eq!(state, before);
}

#[test]
fn test_terminal_state_rejects_every_move() {
    let state = GameState::replay(Mode::TwoPlayer, &[0, 3, 1, 4, 2]).unwrap();
    assert!(state.is_over());
    for index in 0..9 {
        let mut attempt = state.clone();
        assert_eq!(
            attempt.apply_move(index, Player::O),
            Err(IllegalMoveError::GameOver)
        );
        assert_eq!(attempt, state);
    }
}

#[test]
fn test_replay_stops_at_first_illegal_move() {
    let result = GameState::replay(Mode::TwoPlayer, &[0, 0]);
    assert_eq!(result, Err(IllegalMoveError::SquareOccupied(0)));
}
