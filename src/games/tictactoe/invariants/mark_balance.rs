//! Cross and Nought alternate, Cross first.

use super::super::{Board, Mark};
use super::Invariant;

/// Invariant: Cross has played as many marks as Nought, or one more.
pub struct MarkBalance;

impl MarkBalance {
    /// Returns (crosses, noughts) on the board.
    pub fn counts(board: &Board) -> (usize, usize) {
        board
            .cells()
            .iter()
            .filter_map(|cell| cell.mark())
            .fold((0, 0), |(x, o), mark| match mark {
                Mark::Cross => (x + 1, o),
                Mark::Nought => (x, o + 1),
            })
    }
}

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let (crosses, noughts) = Self::counts(board);
        crosses == noughts || crosses == noughts + 1
    }

    fn description() -> &'static str {
        "Cross moves first and players alternate"
    }
}
