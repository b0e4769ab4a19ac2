//! Noughts and crosses - tic-tac-toe with a perfect-play computer opponent
//!
//! # Architecture
//!
//! - **Board**: fixed 9-cell grid tracking occupancy, empty count, and wins
//! - **Engine**: exhaustive minimax search over the board
//! - **Controller**: turn order and computer replies, reporting to a [`Renderer`]
//! - **Settings**: new-game preferences loaded from TOML
//!
//! # Example
//!
//! ```
//! use noughts_and_crosses::{GameController, Mark, Mode, RenderEvent, SessionState};
//!
//! let mut controller = GameController::with_seed(Vec::<RenderEvent>::new(), 1);
//! controller.start_game(Mode::HumanVsComputer, Mark::Cross);
//! controller.apply_move(4);
//!
//! // The computer answered before apply_move returned.
//! assert_eq!(controller.session().board().empty_count(), 7);
//! assert_eq!(controller.session().state(), SessionState::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod settings;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELLS, Cell, Engine, Evaluation, GameController, GameSession, InvalidCellError, Line,
    Mark, Mode, MoveAnalysis, MoveOutcome, Opening, Player, Position, RenderEvent, Renderer,
    SessionState,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    BoardInvariants, EmptyCountConsistent, Invariant, InvariantSet, InvariantViolation,
    MarkBalance,
};
pub use games::tictactoe::rules::{LINES, lines_through};

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};
