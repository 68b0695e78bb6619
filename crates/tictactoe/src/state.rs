//! Authoritative game state and the move rules that mutate it.

use super::action::{IllegalMoveError, Move};
use super::invariants::MarkCountInvariant;
use super::rules::compute_status;
use super::types::{Board, GameStatus, Mode, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// The board is only ever written by [`GameState::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Selected mode.
    mode: Mode,
    /// Accepted moves in order.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move, in progress.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            mode,
            history: Vec::new(),
        }
    }

    /// Returns the fresh initial state for the same mode.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&self) -> Self {
        Self::new(self.mode)
    }

    /// Adopts an arbitrary board, e.g. for analysis.
    ///
    /// X is to move when both players have the same number of marks,
    /// O otherwise. The history is empty.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, mode: Mode) -> Self {
        let current_player = if board.count(Player::X) == board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        let status = compute_status(&board);
        Self {
            board,
            current_player,
            status,
            mode,
            history: Vec::new(),
        }
    }

    /// Replays moves from the initial state, players alternating from X.
    #[instrument]
    pub fn replay(mode: Mode, indexes: &[usize]) -> Result<Self, IllegalMoveError> {
        let mut state = Self::new(mode);
        for &index in indexes {
            let player = state.current_player;
            state.apply_move(index, player)?;
        }
        Ok(state)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Once the game is over this stays on the player who made the last move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Indexes that accept a move right now.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.empty_squares().collect()
    }

    /// Places `player`'s mark at `index`.
    ///
    /// On success the status is re-evaluated and, if the game is still in
    /// progress, the turn passes to the other player. On failure nothing
    /// changes.
    ///
    /// The player is not checked against [`GameState::current_player`], but
    /// debug builds panic when the move breaks X/O alternation.
    ///
    /// # Errors
    ///
    /// - [`IllegalMoveError::GameOver`] if the game is won or drawn
    /// - [`IllegalMoveError::OutOfRange`] if `index > 8`
    /// - [`IllegalMoveError::SquareOccupied`] if the square is marked
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), IllegalMoveError> {
        if self.is_over() {
            return Err(IllegalMoveError::GameOver);
        }
        match self.board.get(index) {
            None => return Err(IllegalMoveError::OutOfRange(index)),
            Some(Square::Occupied(_)) => return Err(IllegalMoveError::SquareOccupied(index)),
            Some(Square::Empty) => {}
        }

        self.board.set(index, Square::Occupied(player));
        debug_assert!(
            MarkCountInvariant::holds(&self.board),
            "{} played out of turn at {}",
            player,
            index
        );
        self.history.push(Move::new(player, index));
        self.status = compute_status(&self.board);

        if !self.is_over() {
            self.current_player = player.opponent();
        }

        debug!(status = ?self.status, next = %self.current_player, "Move applied");
        Ok(())
    }

    /// Consuming form of [`GameState::apply_move`].
    pub fn with_move(mut self, index: usize, player: Player) -> Result<Self, IllegalMoveError> {
        self.apply_move(index, player)?;
        Ok(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
