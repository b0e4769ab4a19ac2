//! Outbound collaborator interface for presenting the game.

use super::types::{Line, Player};

/// Receives notifications from the controller.
///
/// Implementations draw the board, announce results, or simply record
/// what happened. The controller never reads anything back.
pub trait Renderer {
    /// A mark was placed and the game continues (or tied on this move).
    fn render_move(&mut self, index: usize, player: Player);

    /// `player` completed `line`.
    fn render_win(&mut self, line: Line, player: Player);

    /// The board filled up without a line.
    fn render_tie(&mut self);

    /// It is now `player`'s turn.
    fn render_turn_prompt(&mut self, player: Player);

    /// A new game is starting; wipe any drawn marks.
    fn clear_board_view(&mut self);
}

/// Messages sent from the controller, as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    /// Move was made.
    Move {
        /// Cell index.
        index: usize,
        /// Who moved.
        player: Player,
    },
    /// Game ended with a line.
    Win {
        /// The completed line.
        line: Line,
        /// Who completed it.
        player: Player,
    },
    /// Game ended without a line.
    Tie,
    /// Player to move next.
    TurnPrompt(Player),
    /// Board view cleared.
    Cleared,
}

/// Collects every notification in order.
impl Renderer for Vec<RenderEvent> {
    fn render_move(&mut self, index: usize, player: Player) {
        self.push(RenderEvent::Move { index, player });
    }

    fn render_win(&mut self, line: Line, player: Player) {
        self.push(RenderEvent::Win { line, player });
    }

    fn render_tie(&mut self) {
        self.push(RenderEvent::Tie);
    }

    fn render_turn_prompt(&mut self, player: Player) {
        self.push(RenderEvent::TurnPrompt(player));
    }

    fn clear_board_view(&mut self) {
        self.push(RenderEvent::Cleared);
    }
}
