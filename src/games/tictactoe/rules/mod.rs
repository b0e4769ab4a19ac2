//! Game rules for tic-tac-toe.
//!
//! Pure functions over cell indices. Kept apart from board storage so the
//! search and the controller share one definition of a line.

pub mod win;

pub use win::{LINES, lines_through};
