//! Computer opponents.

mod random;
mod scripted;

pub use random::RandomOpponent;
pub use scripted::ScriptedOpponent;

use crate::games::gomoku::{Board, Position};

/// Something that picks the computer's next cell.
pub trait Opponent: Send {
    /// Chooses an empty cell, or `None` when the board has none left.
    fn choose(&mut self, board: &Board) -> Option<Position>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}
