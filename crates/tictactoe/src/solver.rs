//! Exhaustive minimax search over the 3x3 board.
//!
//! Scores are absolute rather than relative to the side to move:
//! [`X_WINS`] (-1) means X wins with perfect play, [`O_WINS`] (+1) means O
//! wins, [`DRAW`] (0) means neither can force a win. O maximizes, X
//! minimizes. Among equally scored moves the lowest index wins.

use super::rules::winner_for;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome score of a position under perfect play.
pub type Score = i32;

/// X wins.
pub const X_WINS: Score = -1;
/// Nobody can force a win.
pub const DRAW: Score = 0;
/// O wins.
pub const O_WINS: Score = 1;

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BestMove {
    /// Index to play, `None` when the board is already decided.
    pub index: Option<usize>,
    /// Score reached by playing `index` and continuing perfectly.
    pub score: Score,
}

impl BestMove {
    fn leaf(score: Score) -> Self {
        Self { index: None, score }
    }
}

/// Minimax searcher.
///
/// Searches a single scratch copy of the board, placing and removing marks
/// in strict stack order so every candidate sees the same position.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    nodes: u64,
}

impl Solver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns the optimal move for `player` on `board`.
    ///
    /// A board that is already won returns the winner's score with no
    /// index. A full board returns [`DRAW`] with no index; callers should
    /// not ask for a move there.
    #[instrument(skip(self, board))]
    pub fn best_move(&mut self, board: &Board, player: Player) -> BestMove {
        self.nodes = 0;
        let mut scratch = board.clone();
        let best = self.search(&mut scratch, player);
        debug_assert_eq!(&scratch, board, "search must restore the board");
        debug!(nodes = self.nodes, index = ?best.index, score = best.score, "Search complete");
        best
    }

    fn search(&mut self, board: &mut Board, player: Player) -> BestMove {
        self.nodes += 1;

        if winner_for(board, Player::X) {
            return BestMove::leaf(X_WINS);
        }
        if winner_for(board, Player::O) {
            return BestMove::leaf(O_WINS);
        }

        let mut best: Option<BestMove> = None;
        for index in 0..9 {
            if !board.is_empty(index) {
                continue;
            }

            board.set(index, Square::Occupied(player));
            let score = self.search(board, player.opponent()).score;
            board.set(index, Square::Empty);

            let improves = match best {
                None => true,
                Some(current) => match player {
                    Player::O => score > current.score,
                    Player::X => score < current.score,
                },
            };
            if improves {
                best = Some(BestMove {
                    index: Some(index),
                    score,
                });
            }
        }

        // No empty square left: draw.
        best.unwrap_or(BestMove::leaf(DRAW))
    }
}

/// Runs a fresh [`Solver`] on `board`.
pub fn best_move(board: &Board, player: Player) -> BestMove {
    Solver::new().best_move(board, player)
}
