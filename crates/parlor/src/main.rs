//! Parlor - console tic-tac-toe
//!
//! The human plays first against a computer that picks free cells at random.

#![warn(missing_docs)]

mod cli;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::GameConfig;
use parlor_tictactoe::{GameLoop, TerminalConsole};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load(&cli.config)?.with_overrides(&cli);
    run_match(&config)
}

/// Plays rounds on stdin/stdout until the player quits or closes input.
#[instrument(skip_all, fields(human_marker = %config.human_marker(), seed = ?config.seed()))]
fn run_match(config: &GameConfig) -> Result<()> {
    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let stdin = std::io::stdin();
    let console = TerminalConsole::new(stdin.lock(), std::io::stdout());
    let mut game = GameLoop::new(*config.human_marker(), rng, console)
        .with_legend(*config.show_legend());

    match game.run() {
        Ok(rounds) => {
            info!(rounds, "Match over");
            println!("Thanks for playing!");
            Ok(())
        }
        Err(e) if e.is_console_closed() => {
            info!("Input closed, leaving the match");
            println!();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();
}
