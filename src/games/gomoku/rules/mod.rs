//! Game rules for four-in-a-row.
//!
//! Pure functions over a [`Board`](super::Board). Keeping them apart from
//! board storage lets the controller and the UI share one definition of a
//! win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Direction, WIN_COUNT, WinLine, is_winning_move, run_length, winning_line};
