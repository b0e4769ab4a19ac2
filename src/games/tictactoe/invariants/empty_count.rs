//! Cached empty count matches the cells.

use super::super::{Board, Cell};
use super::Invariant;

/// Invariant: the board's empty count equals its number of empty cells.
pub struct EmptyCountConsistent;

impl Invariant<Board> for EmptyCountConsistent {
    fn holds(board: &Board) -> bool {
        let counted = board.cells().iter().filter(|c| **c == Cell::Empty).count();
        counted == board.empty_count()
    }

    fn description() -> &'static str {
        "Empty count matches the number of empty cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_holds_through_place_retract_reset() {
        let mut board = Board::new();
        assert!(EmptyCountConsistent::holds(&board));

        for index in [0, 4, 8, 2] {
            board.place(index, Mark::Cross);
            assert!(EmptyCountConsistent::holds(&board));
        }

        board.retract(4);
        assert!(EmptyCountConsistent::holds(&board));

        board.reset();
        assert!(EmptyCountConsistent::holds(&board));
    }

    #[test]
    fn test_rejected_place_keeps_count() {
        let mut board = Board::new();
        board.place(3, Mark::Cross);
        board.place(3, Mark::Nought);
        board.place(42, Mark::Nought);
        assert!(EmptyCountConsistent::holds(&board));
        assert_eq!(board.empty_count(), 8);
    }
}
