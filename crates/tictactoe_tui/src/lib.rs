//! Terminal front-end and command-line tools for the `tictactoe` crate.
//!
//! - **app**: key handling on top of [`tictactoe::Controller`]
//! - **ui**: ratatui rendering of the board, turn and status lines
//! - **commands**: `solve` and `status` analysis of JSON boards
//! - **config**: TOML settings for the interactive game

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod commands;
mod config;
mod input;
mod logging;
mod tui;
mod ui;

pub use app::{App, TerminalView};
pub use cli::{Cli, Command};
pub use commands::{SolveReport, StatusReport, parse_board, solve, status};
pub use config::{ConfigError, TuiConfig};
pub use input::{digit_to_index, move_cursor};
pub use logging::{init_file, init_stderr};
pub use tui::run;
pub use ui::draw;
