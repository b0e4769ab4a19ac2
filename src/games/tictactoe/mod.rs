//! Tic-tac-toe: board model, minimax engine, and game controller.

mod board;
mod controller;
mod error;
pub mod invariants;
mod minimax;
mod position;
mod renderer;
pub mod rules;
mod types;

pub use board::{Board, CELLS};
pub use controller::{GameController, GameSession, Opening};
pub use error::InvalidCellError;
pub use minimax::{Engine, Evaluation, MoveAnalysis};
pub use position::Position;
pub use renderer::{RenderEvent, Renderer};
pub use types::{Cell, Line, Mark, Mode, MoveOutcome, Player, SessionState};
