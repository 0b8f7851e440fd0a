//! Win detection.
//!
//! A new line can only be completed by the newest mark, so only the four
//! lines through the last placed cell are inspected.

use super::super::{Board, Cell, Mark, Position};
use derive_getters::Getters;
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// Marks in a row needed to win, whatever the board size.
pub const WIN_COUNT: usize = 4;

/// Axis a line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum Direction {
    /// Down a column.
    Vertical,
    /// Along a row.
    Horizontal,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// `(row, col)` step for one cell along this axis.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// The run that won the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct WinLine {
    /// Mark forming the line.
    mark: Mark,
    /// Axis of the line.
    direction: Direction,
    /// Every cell of the maximal run, ordered along the axis.
    cells: Vec<Position>,
}

impl WinLine {
    /// Whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Maximal run of `mark` through `origin`, ordered along `direction`.
fn run(board: &Board, origin: Position, mark: Mark, direction: Direction) -> Vec<Position> {
    let side = board.side();
    let delta = direction.delta();
    let same = |pos: &Position| board.get(*pos) == Some(Cell::Occupied(mark));
    let walk = |sign: isize| {
        (1isize..)
            .map_while(move |k| origin.step(delta, sign * k, side))
            .take_while(same)
            .collect::<Vec<_>>()
    };

    let mut cells: Vec<_> = walk(-1).into_iter().rev().collect();
    cells.push(origin);
    cells.extend(walk(1));
    cells
}

/// Length of the run through `origin` along `direction`.
///
/// Counts the cell itself plus matching neighbours in both directions.
/// An empty or off-board origin has no run.
pub fn run_length(board: &Board, origin: Position, direction: Direction) -> usize {
    match board.get(origin).and_then(Cell::mark) {
        Some(mark) => run(board, origin, mark, direction).len(),
        None => 0,
    }
}

/// Checks whether the mark at `origin` is part of a winning line.
#[instrument(skip(board))]
pub fn is_winning_move(board: &Board, origin: Position) -> bool {
    Direction::iter().any(|d| run_length(board, origin, d) >= WIN_COUNT)
}

/// Returns the first winning line through `origin`, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, origin: Position) -> Option<WinLine> {
    let mark = board.get(origin)?.mark()?;
    Direction::iter().find_map(|direction| {
        let cells = run(board, origin, mark, direction);
        (cells.len() >= WIN_COUNT).then_some(WinLine {
            mark,
            direction,
            cells,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::BoardSize;
    use super::*;

    fn board_with(n: u8, mark: Mark, cells: &[(usize, usize)]) -> Board {
        let mut board = Board::new(BoardSize::new(n).unwrap());
        for &(row, col) in cells {
            board.place_mark(Position::new(row, col), mark).unwrap();
        }
        board
    }

    #[test]
    fn test_horizontal_four() {
        let board = board_with(5, Mark::X, &[(2, 0), (2, 1), (2, 2), (2, 3)]);
        assert!(is_winning_move(&board, Position::new(2, 3)));
        let line = winning_line(&board, Position::new(2, 3)).unwrap();
        assert_eq!(*line.direction(), Direction::Horizontal);
        assert_eq!(line.cells().first(), Some(&Position::new(2, 0)));
        assert_eq!(line.cells().len(), 4);
    }

    #[test]
    fn test_diagonal_four() {
        let board = board_with(5, Mark::X, &[(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert!(is_winning_move(&board, Position::new(3, 3)));
    }

    #[test]
    fn test_anti_diagonal_four_from_middle() {
        let board = board_with(6, Mark::O, &[(0, 5), (1, 4), (3, 2), (2, 3)]);
        let line = winning_line(&board, Position::new(2, 3)).unwrap();
        assert_eq!(*line.direction(), Direction::AntiDiagonal);
        assert_eq!(*line.mark(), Mark::O);
        assert!(line.contains(Position::new(0, 5)));
        assert!(line.contains(Position::new(3, 2)));
    }

    #[test]
    fn test_vertical_gap_filled_last() {
        let board = board_with(4, Mark::X, &[(0, 1), (1, 1), (3, 1), (2, 1)]);
        assert_eq!(run_length(&board, Position::new(2, 1), Direction::Vertical), 4);
        assert!(is_winning_move(&board, Position::new(2, 1)));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = board_with(5, Mark::X, &[(0, 0), (0, 1), (0, 2)]);
        assert!(!is_winning_move(&board, Position::new(0, 2)));
        assert_eq!(winning_line(&board, Position::new(0, 2)), None);
    }

    #[test]
    fn test_interrupted_by_other_mark() {
        let mut board = board_with(6, Mark::X, &[(1, 0), (1, 1), (1, 3), (1, 4)]);
        board.place_mark(Position::new(1, 2), Mark::O).unwrap();
        assert!(!is_winning_move(&board, Position::new(1, 4)));
        assert_eq!(run_length(&board, Position::new(1, 2), Direction::Horizontal), 1);
    }

    #[test]
    fn test_five_in_a_row_reports_whole_run() {
        let board = board_with(6, Mark::O, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        let line = winning_line(&board, Position::new(0, 2)).unwrap();
        assert_eq!(line.cells().len(), 5);
    }

    #[test]
    fn test_empty_origin_never_wins() {
        let board = board_with(5, Mark::X, &[(2, 0), (2, 1), (2, 2), (2, 3)]);
        assert!(!is_winning_move(&board, Position::new(2, 4)));
        assert!(!is_winning_move(&board, Position::new(9, 9)));
        assert_eq!(run_length(&board, Position::new(2, 4), Direction::Horizontal), 0);
    }
}
