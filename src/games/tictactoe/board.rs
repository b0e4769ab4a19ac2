//! The 3x3 board with occupancy tracking and win detection.

use super::error::InvalidCellError;
use super::rules::{LINES, lines_through};
use super::types::{Cell, Line, Mark};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are addressed 0-8 in row-major order. The count of empty cells is
/// cached and kept in step with every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELLS],
    empty: usize,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
            empty: CELLS,
        }
    }

    /// Places `mark` at `index`, rejecting out-of-range or occupied cells.
    pub fn try_place(&mut self, index: usize, mark: Mark) -> Result<(), InvalidCellError> {
        match self.cells.get(index) {
            None => Err(InvalidCellError::OutOfRange(index)),
            Some(Cell::Occupied(_)) => Err(InvalidCellError::Occupied(index)),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Occupied(mark);
                self.empty -= 1;
                Ok(())
            }
        }
    }

    /// Places `mark` at `index`. Returns `false` without mutating on failure.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        self.try_place(index, mark).is_ok()
    }

    /// Empties a cell the caller itself filled.
    ///
    /// Only the search uses this, to undo its own placements while
    /// backtracking. Indices must be ones previously placed.
    pub fn retract(&mut self, index: usize) {
        debug_assert!(
            matches!(self.cells[index], Cell::Occupied(_)),
            "retracting empty cell {index}"
        );
        self.cells[index] = Cell::Empty;
        self.empty += 1;
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELLS];
        self.empty = CELLS;
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.empty
    }

    /// Number of marks on the board.
    pub fn placed_count(&self) -> usize {
        CELLS - self.empty
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.empty == 0
    }

    /// Gets the cell at `index`.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are not.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Iterates over the indices of empty cells in increasing order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Returns a completed line through `last`, if any.
    ///
    /// Only the most recent move can complete a line, so only the lines
    /// through it are examined. No move-count gate is applied.
    pub fn check_win(&self, last: usize) -> Option<Line> {
        lines_through(last).find(|&line| self.line_owner(line).is_some())
    }

    /// Scans the whole board for a completed line.
    pub fn winning_line(&self) -> Option<(Line, Mark)> {
        LINES
            .iter()
            .find_map(|&line| self.line_owner(line).map(|mark| (line, mark)))
    }

    fn line_owner(&self, [a, b, c]: Line) -> Option<Mark> {
        match self.cells[a] {
            Cell::Occupied(mark) if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] => {
                Some(mark)
            }
            _ => None,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => '.',
                    Cell::Occupied(mark) => mark.symbol(),
                };
                write!(f, "{}", symbol)?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = String;

    /// Parses nine cell symbols: `X`, `O`, and `.`, `-` or `_` for empty.
    /// Row separators (whitespace, `|`, `/`) are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut index = 0;

        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Some(Mark::Cross),
                'O' | 'o' | '0' => Some(Mark::Nought),
                '.' | '-' | '_' => None,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(format!("Unexpected board symbol '{}'", other)),
            };

            if index >= CELLS {
                return Err("Board has more than 9 cells".to_string());
            }
            if let Some(mark) = cell {
                board.try_place(index, mark).map_err(|e| e.to_string())?;
            }
            index += 1;
        }

        if index != CELLS {
            return Err(format!("Board has {} cells, expected 9", index));
        }
        Ok(board)
    }
}
