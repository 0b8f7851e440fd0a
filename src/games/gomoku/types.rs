//! Core domain types for four-in-a-row.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Cross. Always held by the human.
    X,
    /// Nought. Always held by the computer.
    O,
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark until the board is cleared.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Zero-based board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps `distance` cells along `(dr, dc)`.
    ///
    /// Returns `None` when the step would leave a `size`×`size` board.
    pub fn step(self, (dr, dc): (isize, isize), distance: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr * distance)?;
        let col = self.col.checked_add_signed(dc * distance)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

/// Side length of a square board, validated to `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "u8", into = "u8")]
pub struct BoardSize(u8);

impl BoardSize {
    /// Smallest board that can still hold a winning line.
    pub const MIN: u8 = 4;
    /// Largest board offered.
    pub const MAX: u8 = 10;
    /// Size preselected on the size-selection screen.
    pub const DEFAULT: BoardSize = BoardSize(5);

    /// Validates a side length.
    #[instrument]
    pub fn new(n: u8) -> Result<Self, BoardSizeError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(BoardSizeError { requested: n })
        }
    }

    /// Returns the side length.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the side length as an index bound.
    pub fn cells_per_side(self) -> usize {
        usize::from(self.0)
    }

    /// Next larger size, saturating at `MAX`.
    pub fn grow(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// Next smaller size, saturating at `MIN`.
    pub fn shrink(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// Board size outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Board size {requested} is out of range (4-10)")]
pub struct BoardSizeError {
    /// The rejected side length.
    pub requested: u8,
}
