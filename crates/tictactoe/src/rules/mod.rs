//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so the rules engine and the solver share one definition of
//! a win.

mod draw;
mod win;

pub use draw::{compute_status, is_full};
pub use win::{WINNING_LINES, check_winner, winner_for};
