//! Draw detection.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// Wins are checked first, so a full board reaching this point is a draw.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
