//! N×N board storage.
//!
//! The board only knows about cells. Win and draw rules live in
//! [`super::rules`] and are exposed here as convenience methods.

use super::action::MoveError;
use super::rules::{self, WinLine};
use super::{BoardSize, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Square board of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let n = size.cells_per_side();
        Self {
            size,
            cells: vec![Cell::Empty; n * n],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Side length as an index bound.
    pub fn side(&self) -> usize {
        self.size.cells_per_side()
    }

    /// Whether the coordinates lie on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.side() && pos.col < self.side()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.side() + pos.col)
    }

    /// Returns the cell at `pos`, or `None` if off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Whether the cell at `pos` exists and is unoccupied.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Places `mark` on an empty cell.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for coordinates off the board,
    /// [`MoveError::SquareOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn place_mark(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        let index = self.index(pos).ok_or(MoveError::OutOfBounds(pos))?;
        if self.cells[index] != Cell::Empty {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.cells[index] = Cell::Occupied(mark);
        debug!(%pos, %mark, "Mark placed");
        Ok(())
    }

    /// Whether the mark at `pos` completes a line of
    /// [`WIN_COUNT`](rules::WIN_COUNT).
    pub fn check_win(&self, pos: Position) -> bool {
        rules::is_winning_move(self, pos)
    }

    /// The winning line through `pos`, if any.
    pub fn winning_line(&self, pos: Position) -> Option<WinLine> {
        rules::winning_line(self, pos)
    }

    /// All unoccupied positions, row by row.
    pub fn empty_cells(&self) -> Vec<Position> {
        let side = self.side();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| Position::new(i / side, i % side))
            .collect()
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Clears every cell. The size is kept.
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side())
    }

    /// Formats the board as plain text, `.` for empty cells.
    pub fn display(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => ".".to_string(),
                        Cell::Occupied(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
