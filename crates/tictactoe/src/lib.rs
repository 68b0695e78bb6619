//! Tic-tac-toe game logic with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **GameState**: the 9-square board, player to move, status and mode.
//!   [`GameState::apply_move`] is the only operation that writes squares.
//! - **Rules**: pure win/draw evaluation shared by the state and the solver.
//! - **Solver**: full-depth minimax returning the optimal move and its score.
//! - **Controller**: turns cell clicks, resets and mode changes into state
//!   transitions and pushes the result to a [`GameView`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, GameStatus, Mode, Player, best_move, DRAW};
//!
//! let mut state = GameState::new(Mode::TwoPlayer);
//! state.apply_move(4, Player::X)?;
//! assert_eq!(state.current_player(), Player::O);
//! assert_eq!(state.status(), GameStatus::InProgress);
//!
//! let reply = best_move(state.board(), Player::O);
//! assert_eq!(reply.score, DRAW);
//! # Ok::<(), tictactoe::IllegalMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod invariants;
mod position;
mod rules;
mod solver;
mod state;
mod types;

pub use action::{IllegalMoveError, Move};
pub use controller::{COMPUTER, Controller, GameView};
pub use invariants::{MarkCountInvariant, SingleWinnerInvariant};
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, compute_status, is_full, winner_for};
pub use solver::{BestMove, DRAW, O_WINS, Score, Solver, X_WINS, best_move};
pub use state::GameState;
pub use types::{Board, GameStatus, Mode, Player, Square, SquareParseError};
