//! Tic-tac-toe - terminal front-end and headless replay.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::{Settings, parse_moves, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { player1, player2 } => {
            let settings = Settings::load(cli.config.as_deref())?.with_names(player1, player2);
            run_tui(&settings)
        }
        Command::Replay {
            moves,
            player1,
            player2,
            json,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            let settings = Settings::load(cli.config.as_deref())?.with_names(player1, player2);
            run_replay(&settings, &moves, json)
        }
    }
}

/// Runs the headless replay and prints the board and status.
#[instrument(skip(settings))]
fn run_replay(settings: &Settings, moves: &str, json: bool) -> Result<()> {
    let moves = parse_moves(moves)?;
    info!(count = moves.len(), "Parsed moves");

    let report = replay(settings.player1(), settings.player2(), &moves);
    if json {
        let out = serde_json::to_string_pretty(&report.snapshot)
            .context("Failed to serialize snapshot")?;
        println!("{}", out);
    } else {
        println!("{}\n\n{}", report.board, report.snapshot.status);
        if !report.rejected.is_empty() {
            println!("Ignored moves: {:?}", report.rejected);
        }
    }
    Ok(())
}
