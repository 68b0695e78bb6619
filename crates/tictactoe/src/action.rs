//! Move records and move errors.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// A mark placed on the board: who played and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Board index (0-8) of the marked square.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// A move the rules do not allow.
///
/// The controller recovers from these by ignoring the triggering event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveError {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index is not in 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the index is already marked.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),
}

impl std::error::Error for IllegalMoveError {}
