//! Exhaustive minimax search for the computer player.
//!
//! The search walks every continuation by placing a mark, recursing, and
//! retracting the mark again, so a single board is shared by the whole
//! tree. Terminal positions score `+1` when the maximizer completed a
//! line, `-1` when the opponent did, and `0` for a full board. Each score
//! carries the ply depth at which it occurred, and among equal scores the
//! shallower one is preferred.

use super::board::{Board, CELLS};
use super::types::Mark;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Score of a line of play paired with the depth it was reached at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// `+1` win, `0` tie, `-1` loss, from the maximizer's side.
    pub score: i8,
    /// Plies below the root at which the outcome was decided.
    pub depth: u8,
}

impl Evaluation {
    const WIN: i8 = 1;
    const TIE: i8 = 0;
    const LOSS: i8 = -1;

    // Sentinels sit outside the score range so any real result replaces them.
    const FLOOR: Evaluation = Evaluation { score: -2, depth: 0 };
    const CEILING: Evaluation = Evaluation { score: 2, depth: 0 };

    /// True when the maximizing side should take `self` over `other`.
    pub fn beats_for_maximizer(self, other: Evaluation) -> bool {
        self.score > other.score || (self.score == other.score && self.depth < other.depth)
    }

    /// True when the minimizing side should take `self` over `other`.
    pub fn beats_for_minimizer(self, other: Evaluation) -> bool {
        self.score < other.score || (self.score == other.score && self.depth < other.depth)
    }

    /// Returns true if this line of play ends in a win for the maximizer.
    pub fn is_win(self) -> bool {
        self.score == Self::WIN
    }

    /// Returns true if this line of play ends in a loss for the maximizer.
    pub fn is_loss(self) -> bool {
        self.score == Self::LOSS
    }
}

/// One candidate move at the root with its evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveAnalysis {
    /// Cell index of the candidate.
    pub index: usize,
    /// Outcome of perfect play after taking it.
    pub evaluation: Evaluation,
}

/// Minimax decision engine.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    nodes: u64,
}

impl Engine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks the best cell for `to_move`.
    ///
    /// Candidates are tried in increasing index order. Returns `None` when
    /// the board is already full or won, since there is nothing to decide.
    /// The board is left exactly as it was passed in.
    #[instrument(skip(self, board), fields(to_move = %to_move, empty = board.empty_count()))]
    pub fn best_move(&mut self, board: &mut Board, to_move: Mark) -> Option<usize> {
        let (index, evaluation) = self.root(board, to_move)?;
        debug!(index, ?evaluation, nodes = self.nodes, "Engine chose move");
        Some(index)
    }

    /// Returns the value of the position for `to_move` under perfect play.
    #[instrument(skip(self, board), fields(to_move = %to_move))]
    pub fn evaluate(&mut self, board: &mut Board, to_move: Mark) -> Option<Evaluation> {
        self.root(board, to_move).map(|(_, evaluation)| evaluation)
    }

    /// Evaluates every legal move for `to_move`, in index order.
    ///
    /// Empty when the position is already decided.
    #[instrument(skip(self, board), fields(to_move = %to_move))]
    pub fn analyze(&mut self, board: &mut Board, to_move: Mark) -> Vec<MoveAnalysis> {
        if !Self::searchable(board) {
            return Vec::new();
        }
        self.nodes = 0;

        let mut analysis = Vec::with_capacity(board.empty_count());
        for index in 0..CELLS {
            if board.place(index, to_move) {
                let evaluation = self.search(board, index, to_move.opponent(), to_move, 1);
                board.retract(index);
                analysis.push(MoveAnalysis { index, evaluation });
            }
        }
        debug!(candidates = analysis.len(), nodes = self.nodes, "Analysis complete");
        analysis
    }

    fn searchable(board: &Board) -> bool {
        if board.is_full() {
            warn!("Search requested on a full board");
            return false;
        }
        if let Some((line, winner)) = board.winning_line() {
            warn!(?line, %winner, "Search requested on a won board");
            return false;
        }
        true
    }

    fn root(&mut self, board: &mut Board, to_move: Mark) -> Option<(usize, Evaluation)> {
        if !Self::searchable(board) {
            return None;
        }
        self.nodes = 0;

        let mut best: Option<(usize, Evaluation)> = None;
        for index in 0..CELLS {
            if board.place(index, to_move) {
                let evaluation = self.search(board, index, to_move.opponent(), to_move, 1);
                board.retract(index);

                if best.is_none_or(|(_, current)| evaluation.beats_for_maximizer(current)) {
                    best = Some((index, evaluation));
                }
            }
        }
        best
    }

    /// Scores the position reached by placing at `last`, with `to_move` next.
    fn search(
        &mut self,
        board: &mut Board,
        last: usize,
        to_move: Mark,
        maximizer: Mark,
        depth: u8,
    ) -> Evaluation {
        self.nodes += 1;

        if board.check_win(last).is_some() {
            // The line belongs to whoever just moved.
            let score = if to_move == maximizer {
                Evaluation::LOSS
            } else {
                Evaluation::WIN
            };
            return Evaluation { score, depth };
        }
        if board.is_full() {
            return Evaluation {
                score: Evaluation::TIE,
                depth,
            };
        }

        let maximizing = to_move == maximizer;
        let mut best = if maximizing {
            Evaluation::FLOOR
        } else {
            Evaluation::CEILING
        };

        for index in 0..CELLS {
            if board.place(index, to_move) {
                let evaluation = self.search(board, index, to_move.opponent(), maximizer, depth + 1);
                board.retract(index);

                let better = if maximizing {
                    evaluation.beats_for_maximizer(best)
                } else {
                    evaluation.beats_for_minimizer(best)
                };
                if better {
                    best = evaluation;
                }
            }
        }
        best
    }
}
