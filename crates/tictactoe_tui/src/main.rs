//! tictactoe - play in the terminal or analyse boards.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{Cli, Command, TuiConfig};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { mode, config } => {
            let config = TuiConfig::load_or_default(&config)?.with_mode(mode);
            tictactoe_tui::init_file(config.log_file(), config.log_filter())?;
            info!(mode = %config.mode(), "Starting game");
            tictactoe_tui::run(&config)
        }
        Command::Solve { board, player } => {
            tictactoe_tui::init_stderr("warn");
            let report = tictactoe_tui::solve(&board, player)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to encode report")?
            );
            Ok(())
        }
        Command::Status { board } => {
            tictactoe_tui::init_stderr("warn");
            let report = tictactoe_tui::status(&board)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to encode report")?
            );
            Ok(())
        }
    }
}
