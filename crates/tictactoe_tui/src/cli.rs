//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::{Mode, Player};

/// Tic-tac-toe against a friend or a perfect computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Starting mode (two-player or vs-computer), overrides the config file
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Path to the config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,
    },

    /// Print the optimal move for a board as JSON
    Solve {
        /// Board as a JSON array of 9 strings ("", "X" or "O")
        #[arg(short, long)]
        board: String,

        /// Player to move
        #[arg(short, long, default_value = "O")]
        player: Player,
    },

    /// Print the status of a board as JSON
    Status {
        /// Board as a JSON array of 9 strings ("", "X" or "O")
        #[arg(short, long)]
        board: String,
    },
}
