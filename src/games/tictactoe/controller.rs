//! Game controller: turn order, computer moves, and outcome signalling.
//!
//! The controller is a small state machine (`Idle` → `InProgress` →
//! `Ended`) driven by two inbound events, a cell activation and a start
//! request. Everything runs synchronously: when a move hands the turn to a
//! computer-controlled player, that player's reply is searched and applied
//! before control returns to the caller.

use super::board::{Board, CELLS};
use super::error::InvalidCellError;
use super::invariants::{BoardInvariants, InvariantSet};
use super::minimax::Engine;
use super::renderer::Renderer;
use super::types::{Mark, Mode, MoveOutcome, Player, SessionState};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a computer-controlled Cross picks its first move on the empty board.
///
/// Every opening cell leads to a draw under perfect play, so this only
/// affects variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opening {
    /// Any cell, uniformly at random.
    #[default]
    Random,
    /// Run the full search (deterministic).
    Search,
}

/// Per-session state: the board, both players, and whose turn it is.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    cross: Player,
    nought: Player,
    mode: Mode,
    current: Mark,
    state: SessionState,
}

impl GameSession {
    /// Creates an idle session with two human players.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            cross: Player::new(Mark::Cross),
            nought: Player::new(Mark::Nought),
            mode: Mode::default(),
            current: Mark::Cross,
            state: SessionState::Idle,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player using `mark`.
    pub fn player(&self, mark: Mark) -> Player {
        match mark {
            Mark::Cross => self.cross,
            Mark::Nought => self.nought,
        }
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.player(self.current)
    }

    /// Returns the mode of the current (or last) game.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    fn player_mut(&mut self, mark: Mark) -> &mut Player {
        match mark {
            Mark::Cross => &mut self.cross,
            Mark::Nought => &mut self.nought,
        }
    }

    /// Places the current player's mark and classifies the result.
    fn play(&mut self, index: usize) -> Result<MoveOutcome, InvalidCellError> {
        self.board.try_place(index, self.current)?;

        debug_assert!(
            BoardInvariants::check_all(&self.board).is_ok(),
            "board invariants violated after move at {index}"
        );

        if let Some(line) = self.board.check_win(index) {
            Ok(MoveOutcome::Win(line))
        } else if self.board.is_full() {
            Ok(MoveOutcome::Tie)
        } else {
            Ok(MoveOutcome::Continue)
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives a game session and reports to a [`Renderer`].
#[derive(Debug, Clone)]
pub struct GameController<R> {
    session: GameSession,
    renderer: R,
    engine: Engine,
    rng: SmallRng,
    opening: Opening,
}

impl<R: Renderer> GameController<R> {
    /// Creates a controller with an entropy-seeded opening RNG.
    #[instrument(skip(renderer))]
    pub fn new(renderer: R) -> Self {
        Self::with_rng(renderer, SmallRng::from_entropy())
    }

    /// Creates a controller whose random openings are reproducible.
    #[instrument(skip(renderer))]
    pub fn with_seed(renderer: R, seed: u64) -> Self {
        Self::with_rng(renderer, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(renderer: R, rng: SmallRng) -> Self {
        Self {
            session: GameSession::new(),
            renderer,
            engine: Engine::new(),
            rng,
            opening: Opening::default(),
        }
    }

    /// Sets the opening policy.
    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.opening = opening;
        self
    }

    /// Returns the session state.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the controller, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Inbound event: the user asked for a new game.
    pub fn on_start_requested(&mut self, mode: Mode, human_choice: Mark) {
        self.start_game(mode, human_choice);
    }

    /// Inbound event: the user activated a cell.
    pub fn on_cell_activated(&mut self, index: usize) {
        self.apply_move(index);
    }

    /// Starts a fresh game, discarding any game in progress.
    ///
    /// In [`Mode::HumanVsComputer`] the player using `human_choice` is
    /// human and the other is the computer; `human_choice` is ignored in
    /// [`Mode::HumanVsHuman`]. Cross always moves first, so a computer
    /// Cross plays its opening before this returns.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, mode: Mode, human_choice: Mark) {
        if self.session.state == SessionState::InProgress {
            info!("Discarding game in progress");
        }

        self.session.board.reset();
        self.renderer.clear_board_view();

        for mark in [Mark::Cross, Mark::Nought] {
            self.session.player_mut(mark).is_computer_controlled =
                mode == Mode::HumanVsComputer && mark != human_choice;
        }
        self.session.mode = mode;
        self.session.current = Mark::Cross;
        self.session.state = SessionState::InProgress;

        info!(mode = mode.label(), "Game started");
        let first = self.session.current_player();
        self.renderer.render_turn_prompt(first);

        if first.is_computer_controlled {
            let index = self.opening_move();
            debug!(index, opening = ?self.opening, "Computer opens");
            self.apply_move(index);
        }
    }

    /// Applies a move for the player to move.
    ///
    /// Ignored unless a game is in progress, and ignored when the cell is
    /// occupied or out of range. After a move that keeps the game going,
    /// computer-controlled replies are applied in turn until a human is to
    /// move or the game ends.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) {
        let mut next = Some(index);

        while let Some(index) = next.take() {
            if self.session.state != SessionState::InProgress {
                debug!(index, state = ?self.session.state, "Move ignored, no game in progress");
                return;
            }

            let player = self.session.current_player();
            let outcome = match self.session.play(index) {
                Ok(outcome) => outcome,
                Err(e) => {
                    debug!(error = %e, "Move rejected");
                    return;
                }
            };
            debug!(index, player = player.name(), ?outcome, "Move applied");

            match outcome {
                MoveOutcome::Win(line) => {
                    self.session.state = SessionState::Ended;
                    info!(winner = player.name(), ?line, "Game won");
                    self.renderer.render_win(line, player);
                }
                MoveOutcome::Tie => {
                    self.session.state = SessionState::Ended;
                    info!("Game tied");
                    self.renderer.render_move(index, player);
                    self.renderer.render_tie();
                }
                MoveOutcome::Continue => {
                    self.renderer.render_move(index, player);
                    self.session.current = self.session.current.opponent();

                    let up = self.session.current_player();
                    self.renderer.render_turn_prompt(up);

                    if up.is_computer_controlled {
                        next = self.engine.best_move(&mut self.session.board, up.mark);
                    }
                }
            }
        }
    }

    /// Suggests the engine's move for the player to move, without playing it.
    #[instrument(skip(self))]
    pub fn suggest_move(&mut self) -> Option<usize> {
        if self.session.state != SessionState::InProgress {
            return None;
        }
        let mark = self.session.current;
        self.engine.best_move(&mut self.session.board, mark)
    }

    fn opening_move(&mut self) -> usize {
        match self.opening {
            Opening::Random => self.rng.gen_range(0..CELLS),
            Opening::Search => self
                .engine
                .best_move(&mut self.session.board, self.session.current)
                .unwrap_or(0),
        }
    }
}
