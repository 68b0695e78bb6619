//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};

/// The 8 lines that win the game, as board indexes.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in row, column, diagonal
/// order, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c) {
            if let Some(Square::Occupied(player)) = sq {
                return Some(player);
            }
        }
    }

    None
}

/// Checks whether `player` owns at least one complete line.
pub fn winner_for(board: &Board, player: Player) -> bool {
    let mark = Some(Square::Occupied(player));
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == mark))
}
