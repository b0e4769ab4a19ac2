//! Line geometry for win detection.

use super::super::Line;

/// All eight winning lines.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

const MAIN_DIAGONAL: Line = [0, 4, 8];
const ANTI_DIAGONAL: Line = [2, 4, 6];

/// Returns the lines passing through `index`, row first.
///
/// Every cell lies on one row and one column. Corners add one diagonal and
/// the center adds both; edge cells have none. Indices past 8 yield nothing.
pub fn lines_through(index: usize) -> impl Iterator<Item = Line> {
    let valid = index < 9;
    let (row, column) = if valid { ((index / 3) * 3, index % 3) } else { (0, 0) };

    let straight = [[row, row + 1, row + 2], [column, column + 3, column + 6]];
    let main = MAIN_DIAGONAL.contains(&index).then_some(MAIN_DIAGONAL);
    let anti = ANTI_DIAGONAL.contains(&index).then_some(ANTI_DIAGONAL);

    straight
        .into_iter()
        .chain(main)
        .chain(anti)
        .filter(move |_| valid)
}
