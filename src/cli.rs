//! Command-line interface for noughts_and_crosses.

use clap::{Parser, Subcommand};
use noughts_and_crosses::{Mark, Mode, Opening};

/// Noughts and crosses - tic-tac-toe against a perfect-play engine
#[derive(Parser, Debug)]
#[command(name = "noughts_and_crosses")]
#[command(about = "Tic-tac-toe with a minimax computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it doesn't exist)
    #[arg(long, global = true, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI (default)
    Play {
        /// Game mode: human-vs-human or human-vs-computer
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Mark the human plays against the computer: cross or nought
        #[arg(long)]
        human: Option<Mark>,

        /// Opening policy for a computer Cross: random or search
        #[arg(long, value_parser = parse_opening)]
        opening: Option<Opening>,

        /// Seed for random openings
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the engine play both sides and print the game
    Selfplay {
        /// Opening policy for Cross: random or search
        #[arg(long, value_parser = parse_opening, default_value = "search")]
        opening: Opening,

        /// Seed for random openings
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Evaluate every move in a position
    Analyze {
        /// Nine cells row by row: X, O, and . for empty (e.g. "X.O/.X./...")
        #[arg(short, long)]
        board: String,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(short, long)]
        to_move: Option<Mark>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_opening(s: &str) -> Result<Opening, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "random" => Ok(Opening::Random),
        "search" => Ok(Opening::Search),
        other => Err(format!("Unknown opening '{}' (expected random or search)", other)),
    }
}
