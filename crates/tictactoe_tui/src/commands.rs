//! Non-interactive board analysis commands.

use anyhow::{Context, Result};
use serde::Serialize;
use tictactoe::{BestMove, Board, GameStatus, Player, Position, Solver, compute_status};
use tracing::{info, instrument, warn};

/// Output of `tictactoe solve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    /// Player the move was computed for.
    pub player: Player,
    /// Status of the input board.
    pub status: GameStatus,
    /// Optimal move and its score.
    pub best: BestMove,
    /// Name of the square to play, e.g. `"Center"`.
    pub square: Option<String>,
    /// Positions the search visited.
    pub nodes: u64,
}

/// Output of `tictactoe status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Status of the board.
    pub status: GameStatus,
    /// Winning player, if any.
    pub winner: Option<Player>,
    /// Status line as shown in the game.
    pub message: String,
    /// The board as a 3x3 text grid.
    pub grid: String,
}

/// Parses a board from a JSON array of 9 strings.
pub fn parse_board(json: &str) -> Result<Board> {
    serde_json::from_str(json).with_context(|| format!("Invalid board: {}", json))
}

/// Computes the optimal move for `player`.
#[instrument]
pub fn solve(board_json: &str, player: Player) -> Result<SolveReport> {
    let board = parse_board(board_json)?;
    let status = compute_status(&board);
    if status.is_terminal() {
        warn!(?status, "Board is already decided");
    }

    let mut solver = Solver::new();
    let best = solver.best_move(&board, player);
    info!(index = ?best.index, score = best.score, "Solved");

    Ok(SolveReport {
        player,
        status,
        best,
        square: best.index.and_then(Position::from_index).map(|p| p.to_string()),
        nodes: solver.nodes(),
    })
}

/// Evaluates the status of a board.
#[instrument]
pub fn status(board_json: &str) -> Result<StatusReport> {
    let board = parse_board(board_json)?;
    let status = compute_status(&board);
    Ok(StatusReport {
        status,
        winner: status.winner(),
        message: status.message(),
        grid: board.display(),
    })
}
