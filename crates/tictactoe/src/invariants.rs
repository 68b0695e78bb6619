//! Board invariants that hold for every reachable position.

use super::rules::winner_for;
use super::types::{Board, Player};
use tracing::warn;

/// X moves first and players alternate, so X has as many marks as O or one more.
pub struct MarkCountInvariant;

impl MarkCountInvariant {
    /// Checks the invariant, logging a warning on violation.
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark count invariant violated");
        }
        valid
    }
}

/// At most one player owns a complete line.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    /// Checks the invariant, logging a warning on violation.
    pub fn holds(board: &Board) -> bool {
        let valid = !(winner_for(board, Player::X) && winner_for(board, Player::O));
        if !valid {
            warn!("Both players own a winning line");
        }
        valid
    }
}

/// Asserts all board invariants in debug builds.
pub fn assert_invariants(board: &Board) {
    debug_assert!(MarkCountInvariant::holds(board), "Mark count invariant violated");
    debug_assert!(SingleWinnerInvariant::holds(board), "Both players own a winning line");
}
