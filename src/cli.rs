//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to ./tictactoe.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Pre-filled name for player 1 (X)
        #[arg(long)]
        player1: Option<String>,

        /// Pre-filled name for player 2 (O)
        #[arg(long)]
        player2: Option<String>,
    },

    /// Play a list of moves without a UI and print the result
    Replay {
        /// Comma-separated cell indices (0-8) or labels, e.g. "0,1,4,2,8"
        #[arg(short, long)]
        moves: String,

        /// Name for player 1 (X)
        #[arg(long)]
        player1: Option<String>,

        /// Name for player 2 (O)
        #[arg(long)]
        player2: Option<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
