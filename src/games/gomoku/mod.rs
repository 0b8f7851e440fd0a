//! Four-in-a-row on an N×N board.

mod action;
mod board;
mod controller;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::Board;
pub use controller::{GameController, MoveTicket, Outcome, Phase, Seats, Side, Status, Turn};
pub use rules::{Direction, WIN_COUNT, WinLine};
pub use types::{BoardSize, BoardSizeError, Cell, Mark, Position};
