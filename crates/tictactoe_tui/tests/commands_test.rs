//! Tests for the solve and status commands.

use tictactoe::{BestMove, GameStatus, Player};
use tictactoe_tui::{parse_board, solve, status};

#[test]
fn test_solve_empty_board_for_o() {
    let report = solve(r#"["","","","","","","","",""]"#, Player::O).unwrap();
    assert_eq!(report.best.score, 0);
    assert_eq!(report.status, GameStatus::InProgress);
    assert_eq!(report.player, Player::O);
    assert!(report.nodes > 0);
}

#[test]
fn test_solve_reports_winning_move() {
    let report = solve(r#"["X","X","","","O","O","","",""]"#, Player::X).unwrap();
    assert_eq!(report.best, BestMove { index: Some(2), score: -1 });
    assert_eq!(report.square.as_deref(), Some("Top-right"));
}

#[test]
fn test_solve_decided_board_has_no_move() {
    let report = solve(r#"["X","X","X","O","O","","","",""]"#, Player::O).unwrap();
    assert_eq!(report.status, GameStatus::Won(Player::X));
    assert_eq!(report.best.index, None);
    assert_eq!(report.square, None);
}

#[test]
fn test_status_messages() {
    let draw = status(r#"["X","O","X","O","X","O","O","X","O"]"#).unwrap();
    assert_eq!(draw.status, GameStatus::Draw);
    assert_eq!(draw.message, "It's a draw!");
    assert_eq!(draw.winner, None);

    let running = status(r#"["X","","","","","","","",""]"#).unwrap();
    assert_eq!(running.message, "");
}

#[test]
fn test_status_reports_winner_and_grid() {
    let report = status(r#"["O","X","X","","O","X","","","O"]"#).unwrap();
    assert_eq!(report.status, GameStatus::Won(Player::O));
    assert_eq!(report.winner, Some(Player::O));
    assert_eq!(report.message, "O wins!");
    assert_eq!(report.grid, "O|X|X\n-+-+-\n4|O|X\n-+-+-\n7|8|O");
}

#[test]
fn test_report_json_shape() {
    let report = solve(r#"["X","X","","","O","O","","",""]"#, Player::X).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["best"]["index"], 2);
    assert_eq!(json["best"]["score"], -1);
    assert_eq!(json["player"], "X");
    assert_eq!(json["square"], "Top-right");
}

#[test]
fn test_invalid_board_is_an_error() {
    assert!(parse_board("not json").is_err());
    assert!(parse_board(r#"["X"]"#).is_err());
    assert!(status(r#"["A","","","","","","","",""]"#).is_err());
}
