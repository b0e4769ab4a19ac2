//! Noughts and crosses - unified CLI
//!
//! Terminal game plus headless engine tools.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts_and_crosses::{Board, Engine, Mark, MarkBalance, MoveAnalysis, Opening, Settings, CELLS};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play {
        mode: None,
        human: None,
        opening: None,
        seed: None,
    });

    match command {
        Command::Play {
            mode,
            human,
            opening,
            seed,
        } => {
            // Logs go to a file so they don't draw over the board.
            tui::init_file_tracing()?;
            let mut settings = load_settings(&cli.config)?;
            if let Some(mode) = mode {
                settings = settings.with_mode(mode);
            }
            if let Some(human) = human {
                settings = settings.with_human(human);
            }
            if let Some(opening) = opening {
                settings = settings.with_opening(opening);
            }
            if let Some(seed) = seed {
                settings = settings.with_seed(seed);
            }
            tui::run_tui(settings)
        }
        Command::Selfplay { opening, seed } => {
            initialize_tracing();
            run_selfplay(opening, seed)
        }
        Command::Analyze {
            board,
            to_move,
            json,
        } => {
            initialize_tracing();
            run_analyze(&board, to_move, json)
        }
    }
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,noughts_and_crosses=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[instrument]
fn load_settings(path: &std::path::Path) -> Result<Settings> {
    Settings::load_or_default(path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))
}

/// Plays the engine against itself from the empty board.
#[instrument]
fn run_selfplay(opening: Opening, seed: Option<u64>) -> Result<()> {
    info!("Starting self-play");

    let mut board = Board::new();
    let mut engine = Engine::new();
    let mut to_move = Mark::Cross;

    loop {
        let index = if board.empty_count() == CELLS && opening == Opening::Random {
            let mut rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };
            rng.gen_range(0..CELLS)
        } else {
            engine
                .best_move(&mut board, to_move)
                .context("Engine found no move on an undecided board")?
        };
        debug!(index, player = %to_move, nodes = engine.nodes(), "Self-play move");

        board
            .try_place(index, to_move)
            .context("Engine chose an unavailable cell")?;
        println!("{} plays {}\n{}\n", to_move, index, board);

        if let Some(line) = board.check_win(index) {
            println!("{} wins with {:?}", to_move, line);
            return Ok(());
        }
        if board.is_full() {
            println!("Tie!");
            return Ok(());
        }
        to_move = to_move.opponent();
    }
}

#[derive(Debug, Serialize)]
struct AnalysisReport {
    board: String,
    to_move: Mark,
    best: Option<usize>,
    moves: Vec<MoveAnalysis>,
}

/// Prints the engine's view of every move in a position.
#[instrument]
fn run_analyze(board: &str, to_move: Option<Mark>, json: bool) -> Result<()> {
    let mut board: Board = board
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("Invalid board")?;

    let to_move = to_move.unwrap_or_else(|| {
        let (crosses, noughts) = MarkBalance::counts(&board);
        if crosses > noughts {
            Mark::Nought
        } else {
            Mark::Cross
        }
    });

    let mut engine = Engine::new();
    let moves = engine.analyze(&mut board, to_move);
    let best = engine.best_move(&mut board, to_move);

    let report = AnalysisReport {
        board: board.to_string(),
        to_move,
        best,
        moves,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", report.board);
    if report.moves.is_empty() {
        println!("Position is already decided.");
        return Ok(());
    }
    println!("{} to move:", to_move);
    for MoveAnalysis { index, evaluation } in &report.moves {
        let verdict = if evaluation.is_win() {
            "wins"
        } else if evaluation.is_loss() {
            "loses"
        } else {
            "ties"
        };
        let marker = if report.best == Some(*index) { " <- best" } else { "" };
        println!(
            "  cell {}: {} at ply {}{}",
            index, verdict, evaluation.depth, marker
        );
    }
    Ok(())
}
