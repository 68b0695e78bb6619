//! Draw detection and overall status evaluation.

use super::win::check_winner;
use crate::types::{Board, GameStatus, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Evaluates the status of a board.
///
/// A completed line wins even on a full board; only a full board with no
/// line is a draw.
pub fn compute_status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn full_board(marks: [Player; 9]) -> Board {
        Board::from_squares(marks.map(Square::Occupied))
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(compute_status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        use Player::{O, X};
        // X O X / O X O / O X O
        let board = full_board([X, O, X, O, X, O, O, X, O]);
        assert!(is_full(&board));
        assert_eq!(compute_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_won() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = full_board([X, X, X, O, O, X, X, O, O]);
        assert_eq!(compute_status(&board), GameStatus::Won(X));
    }

    #[test]
    fn test_status_is_idempotent() {
        use Player::{O, X};
        let board = full_board([X, O, X, O, X, O, O, X, O]);
        assert_eq!(compute_status(&board), compute_status(&board));
    }
}
