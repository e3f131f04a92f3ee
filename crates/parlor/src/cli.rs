//! Command-line interface for parlor.

use clap::Parser;
use parlor_tictactoe::Marker;
use std::path::PathBuf;

/// Parlor - tic-tac-toe against a random-move computer
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Console tic-tac-toe against a random-move computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (missing file means defaults)
    #[arg(short, long, default_value = "parlor.toml")]
    pub config: PathBuf,

    /// Seed for the computer's moves, for replayable matches
    #[arg(long)]
    pub seed: Option<u64>,

    /// Marker the human plays (x or o)
    #[arg(long)]
    pub human_marker: Option<Marker>,

    /// Hide the 1-9 positions legend under the board
    #[arg(long)]
    pub no_legend: bool,
}
