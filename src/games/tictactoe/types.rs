//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Three cell indices forming a row, column, or diagonal.
pub type Line = [usize; 3];

/// The symbol a player places in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Cross (always moves first).
    #[display("Cross")]
    Cross,
    /// Nought.
    #[display("Nought")]
    Nought,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// Returns the player name for this mark.
    pub fn label(self) -> &'static str {
        match self {
            Mark::Cross => "Cross",
            Mark::Nought => "Nought",
        }
    }

    /// Returns the single-character board symbol.
    pub fn symbol(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Nought => 'O',
        }
    }
}

impl FromStr for Mark {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cross" | "x" => Ok(Mark::Cross),
            "nought" | "naught" | "o" => Ok(Mark::Nought),
            other => Err(format!("Unknown mark '{}' (expected cross or nought)", other)),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// One of the two session players.
///
/// The mark doubles as the player's name. Whether the computer controls
/// the player is reassigned at the start of every game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// The mark this player places.
    pub mark: Mark,
    /// Whether the engine picks this player's moves.
    pub is_computer_controlled: bool,
}

impl Player {
    /// Creates a human-controlled player.
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            is_computer_controlled: false,
        }
    }

    /// Returns the player's name.
    pub fn name(&self) -> &'static str {
        self.mark.label()
    }
}

/// Who is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the board.
    HumanVsHuman,
    /// One human plays the engine.
    #[default]
    HumanVsComputer,
}

impl Mode {
    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Mode::HumanVsHuman => "Human vs Human",
            Mode::HumanVsComputer => "Human vs Computer",
        }
    }

    /// Switches to the other mode.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsComputer,
            Mode::HumanVsComputer => Mode::HumanVsHuman,
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human-vs-human" | "hvh" | "pvp" => Ok(Mode::HumanVsHuman),
            "human-vs-computer" | "hvc" | "computer" => Ok(Mode::HumanVsComputer),
            other => Err(format!("Unknown mode '{}'", other)),
        }
    }
}

/// Result of applying a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on with the other player.
    Continue,
    /// The move completed a line.
    Win(Line),
    /// The board filled up without a line.
    Tie,
}

/// Lifecycle of the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No game started yet.
    #[default]
    Idle,
    /// Moves are accepted.
    InProgress,
    /// Won or tied; moves are ignored until the next start.
    Ended,
}
