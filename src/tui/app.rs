//! Application state: the terminal's view of the game.

use noughts_and_crosses::{CELLS, Line, Mark, Player, Renderer};
use tracing::debug;

/// What the terminal shows, built purely from controller notifications.
#[derive(Debug, Clone)]
pub struct App {
    cells: [Option<Mark>; CELLS],
    winning_line: Option<(Line, Mark)>,
    status_message: String,
    hint: Option<usize>,
}

impl App {
    /// Creates a blank view.
    pub fn new() -> Self {
        Self {
            cells: [None; CELLS],
            winning_line: None,
            status_message: "Press 'r' to start a game.".to_string(),
            hint: None,
        }
    }

    /// Mark drawn in a cell.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Winning line and its owner, once the game is won.
    pub fn winning_line(&self) -> Option<(Line, Mark)> {
        self.winning_line
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Cell the engine suggested, until the next move.
    pub fn hint(&self) -> Option<usize> {
        self.hint
    }

    /// Shows a suggested cell.
    pub fn set_hint(&mut self, hint: Option<usize>) {
        self.hint = hint;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for App {
    fn render_move(&mut self, index: usize, player: Player) {
        debug!(index, player = player.name(), "Drawing move");
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Some(player.mark);
        }
        self.hint = None;
    }

    fn render_win(&mut self, line: Line, player: Player) {
        for index in line {
            self.cells[index] = Some(player.mark);
        }
        self.winning_line = Some((line, player.mark));
        self.hint = None;
        self.status_message = format!(
            "{} has won, congratulations! Press 'r' to play again.",
            player.name()
        );
    }

    fn render_tie(&mut self) {
        self.status_message = "Tie! Press 'r' to play again.".to_string();
    }

    fn render_turn_prompt(&mut self, player: Player) {
        self.status_message = if player.is_computer_controlled {
            format!("{} (computer) is thinking...", player.name())
        } else {
            format!("{}, now is your turn.", player.name())
        };
    }

    fn clear_board_view(&mut self) {
        debug!("Clearing board view");
        self.cells = [None; CELLS];
        self.winning_line = None;
        self.hint = None;
    }
}
