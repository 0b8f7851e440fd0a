//! Strictly Gomoku - four in a row on an N×N board
//!
//! A human plays X against a computer that picks uniformly among the empty
//! cells. The first line of four, in any direction, wins.
//!
//! # Architecture
//!
//! - **Board**: N×N cells with win detection through the last placed mark
//! - **Controller**: turn order, deferred computer moves, clearing
//! - **Players**: the random opponent and a scripted one for tests
//! - **TUI**: ratatui front end with keyboard and mouse input
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{BoardSize, GameController, Position, ScriptedOpponent, Turn};
//!
//! let opponent = ScriptedOpponent::new([Position::new(4, 4)]);
//! let mut game = GameController::new(BoardSize::DEFAULT, Box::new(opponent));
//!
//! if let Ok(Turn::ComputerToMove(ticket)) = game.play_human(Position::new(2, 2)) {
//!     game.play_computer(ticket).unwrap();
//! }
//! assert_eq!(game.board().empty_cells().len(), 23);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod players;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Game types
pub use games::gomoku::{
    Board, BoardSize, BoardSizeError, Cell, Direction, GameController, Mark, Move, MoveError,
    MoveTicket, Outcome, Phase, Position, Seats, Side, Status, Turn, WIN_COUNT, WinLine, rules,
};

// Crate-level exports - Opponents
pub use players::{Opponent, RandomOpponent, ScriptedOpponent};

// Crate-level exports - Terminal UI
pub use tui::{App, BoardGeometry, ComputerScheduler, Effect, Playing, Screen, run_tui};
