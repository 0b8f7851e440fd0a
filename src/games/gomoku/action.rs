//! Moves and the ways they can be refused.
//!
//! Moves are domain events: who placed which mark where. The controller
//! records the last one so the UI can highlight it.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Why a move was refused.
///
/// None of these are fatal. The terminal UI logs them and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates lie outside the board.
    #[display("Position {} is off the board", _0)]
    OutOfBounds(Position),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has finished; clear the board to play again.
    #[display("Game is already over")]
    GameOver,

    /// The other side is to move.
    #[display("It is not this side's turn")]
    NotYourTurn,

    /// A deferred computer move issued before the board was cleared.
    #[display("Computer move ticket is stale")]
    StaleTicket,
}

impl std::error::Error for MoveError {}
