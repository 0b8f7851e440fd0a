//! Fixed-sequence opponent for deterministic play.

use super::Opponent;
use crate::games::gomoku::{Board, Position};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Plays a fixed list of cells in order.
///
/// Cells that are already taken when their turn comes are skipped. Once
/// the script runs out the opponent falls back to the first empty cell.
#[derive(Debug, Clone)]
pub struct ScriptedOpponent {
    script: VecDeque<Position>,
}

impl ScriptedOpponent {
    /// Creates an opponent that will play `moves` in order.
    pub fn new(moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            script: moves.into_iter().collect(),
        }
    }

    /// Moves left in the script.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Opponent for ScriptedOpponent {
    fn choose(&mut self, board: &Board) -> Option<Position> {
        while let Some(pos) = self.script.pop_front() {
            if board.is_empty(pos) {
                debug!(%pos, "Scripted opponent move");
                return Some(pos);
            }
            warn!(%pos, "Scripted cell unavailable, skipping");
        }
        board.empty_cells().first().copied()
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::{BoardSize, Mark};

    #[test]
    fn test_skips_taken_cells_then_falls_back() {
        let mut board = Board::new(BoardSize::new(4).unwrap());
        board.place_mark(Position::new(1, 1), Mark::X).unwrap();
        let mut opponent = ScriptedOpponent::new([Position::new(1, 1), Position::new(2, 2)]);
        assert_eq!(opponent.choose(&board), Some(Position::new(2, 2)));
        assert_eq!(opponent.remaining(), 0);
        assert_eq!(opponent.choose(&board), Some(Position::new(0, 0)));
    }
}
