//! Move rejection errors.

use derive_more::{Display, Error};

/// A placement that the board refuses.
///
/// Stale or duplicate input produces these routinely; callers absorb them
/// rather than surfacing a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidCellError {
    /// Index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

impl InvalidCellError {
    /// Returns the offending index.
    pub fn index(self) -> usize {
        match self {
            InvalidCellError::OutOfRange(index) | InvalidCellError::Occupied(index) => index,
        }
    }
}
