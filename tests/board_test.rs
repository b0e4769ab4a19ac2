//! Tests for the board model.

use noughts_and_crosses::{
    Board, BoardInvariants, Cell, InvalidCellError, InvariantSet, LINES, Mark,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_empty_count_tracks_places_and_retracts() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..200 {
        let mut board = Board::new();
        let mut placed: Vec<usize> = Vec::new();
        let mut places = 0usize;
        let mut retracts = 0usize;

        for _ in 0..30 {
            if !placed.is_empty() && rng.gen_bool(0.3) {
                let index = placed.swap_remove(rng.gen_range(0..placed.len()));
                board.retract(index);
                retracts += 1;
            } else {
                let index = rng.gen_range(0..12);
                let mark = if rng.gen_bool(0.5) { Mark::Cross } else { Mark::Nought };
                if board.place(index, mark) {
                    placed.push(index);
                    places += 1;
                }
            }
            assert_eq!(board.empty_count(), 9 - (places - retracts));
        }
    }
}

#[test]
fn test_place_on_occupied_never_mutates() {
    let mut board = Board::new();
    assert!(board.place(7, Mark::Nought));
    let before = board.clone();

    assert!(!board.place(7, Mark::Cross));
    assert!(!board.place(7, Mark::Nought));
    assert_eq!(board, before);
    assert_eq!(board.try_place(7, Mark::Cross), Err(InvalidCellError::Occupied(7)));
    assert_eq!(board.try_place(11, Mark::Cross), Err(InvalidCellError::OutOfRange(11)));
}

#[test]
fn test_scenario_column_win() {
    let mut board = Board::new();
    assert!(board.place(0, Mark::Cross));
    assert!(board.place(1, Mark::Nought));
    assert!(board.place(3, Mark::Cross));
    assert!(board.place(4, Mark::Nought));
    assert!(board.place(6, Mark::Cross));

    assert_eq!(board.check_win(6), Some([0, 3, 6]));
}

#[test]
fn test_check_win_line_contains_index() {
    let mut rng = SmallRng::seed_from_u64(7);

    for _ in 0..500 {
        let mut board = Board::new();
        let mut mark = Mark::Cross;
        for _ in 0..rng.gen_range(0..10) {
            let index = rng.gen_range(0..9);
            if board.place(index, mark) {
                mark = mark.opponent();
            }
        }

        for index in 0..9 {
            match board.check_win(index) {
                Some(line) => {
                    assert!(line.contains(&index));
                    let owner = board.get(index);
                    assert!(matches!(owner, Some(Cell::Occupied(_))));
                    assert!(line.iter().all(|&i| board.get(i) == owner));
                }
                None => {
                    for &[a, b, c] in LINES.iter().filter(|line| line.contains(&index)) {
                        let complete = matches!(board.get(a), Some(Cell::Occupied(_)))
                            && board.get(a) == board.get(b)
                            && board.get(b) == board.get(c);
                        assert!(!complete, "missed line through {index}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_check_win_none_without_line() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    for index in 0..9 {
        assert_eq!(board.check_win(index), None);
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut board: Board = "XXX/OO./...".parse().unwrap();
    board.reset();
    assert_eq!(board.empty_count(), 9);
    for index in 0..9 {
        assert_eq!(board.check_win(index), None);
    }

    board.reset();
    assert_eq!(board, Board::new());
    assert!(BoardInvariants::check_all(&board).is_ok());
}

#[test]
fn test_win_reported_at_fifth_mark() {
    let mut board = Board::new();
    let moves = [(4, Mark::Cross), (0, Mark::Nought), (2, Mark::Cross), (1, Mark::Nought)];
    for (index, mark) in moves {
        board.place(index, mark);
        assert_eq!(board.check_win(index), None);
    }
    board.place(6, Mark::Cross);
    assert_eq!(board.check_win(6), Some([2, 4, 6]));
}
