//! Application state and input handling.
//!
//! The app turns key presses and clicks into controller calls and reports
//! back what the event loop has to do with the computer's deferred move.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

use super::input::{is_cursor_key, move_cursor};
use super::ui::BoardGeometry;
use crate::config::GameConfig;
use crate::games::gomoku::{BoardSize, GameController, MoveTicket, Position, Turn};
use crate::players::{Opponent, RandomOpponent};

/// What the event loop must do after the app handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to schedule.
    Nothing,
    /// Schedule the computer's move.
    Schedule(MoveTicket),
    /// Drop any pending computer move, then schedule this one if present.
    Reset(Option<MoveTicket>),
    /// Leave the app.
    Quit,
}

/// A game being played.
#[derive(Debug)]
pub struct Playing {
    controller: GameController,
    cursor: Position,
}

impl Playing {
    fn new(controller: GameController) -> Self {
        let middle = controller.board().side() / 2;
        Self {
            controller,
            cursor: Position::new(middle, middle),
        }
    }

    /// Returns the game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Returns the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    fn place(&mut self, pos: Position) -> Effect {
        match self.controller.play_human(pos) {
            Ok(Turn::ComputerToMove(ticket)) => Effect::Schedule(ticket),
            Ok(_) => Effect::Nothing,
            Err(e) => {
                debug!(error = %e, %pos, "Move ignored");
                Effect::Nothing
            }
        }
    }
}

/// Which screen is showing.
#[derive(Debug)]
pub enum Screen {
    /// Choosing the board size before a game.
    SizeSelect {
        /// Size that Enter will start.
        size: BoardSize,
    },
    /// A game in progress or finished.
    Playing(Playing),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    config: GameConfig,
}

impl App {
    /// Opens on the size-selection screen.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        let size = *config.board_size();
        Self {
            screen: Screen::SizeSelect { size },
            config,
        }
    }

    /// Opens straight into a game on a board of `size`.
    #[instrument(skip(config))]
    pub fn with_board(config: GameConfig, size: BoardSize) -> Self {
        let controller = GameController::new(size, opponent_for(&config));
        Self::with_controller(config, controller)
    }

    /// Opens straight into a game driven by `controller`.
    pub fn with_controller(config: GameConfig, controller: GameController) -> Self {
        Self {
            screen: Screen::Playing(Playing::new(controller)),
            config,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Effect {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            info!("User quit");
            return Effect::Quit;
        }

        match &mut self.screen {
            Screen::SizeSelect { size } => match key {
                KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => {
                    *size = size.shrink();
                    Effect::Nothing
                }
                KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
                    *size = size.grow();
                    Effect::Nothing
                }
                KeyCode::Enter => {
                    let size = *size;
                    self.start_game(size)
                }
                _ => Effect::Nothing,
            },
            Screen::Playing(playing) => match key {
                key if is_cursor_key(key) => {
                    let side = playing.controller.board().side();
                    playing.cursor = move_cursor(playing.cursor, key, side);
                    Effect::Nothing
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let pos = playing.cursor;
                    playing.place(pos)
                }
                KeyCode::Char('c') => Effect::Reset(playing.controller.clear()),
                KeyCode::Char('n') => {
                    let size = playing.controller.board().size();
                    info!("Back to size selection");
                    self.screen = Screen::SizeSelect { size };
                    Effect::Reset(None)
                }
                _ => Effect::Nothing,
            },
        }
    }

    /// Handles a left click at terminal coordinates inside `frame_area`.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, frame_area: Rect, column: u16, row: u16) -> Effect {
        let Screen::Playing(playing) = &mut self.screen else {
            return Effect::Nothing;
        };
        let geometry = BoardGeometry::for_frame(frame_area, playing.controller.board().side());
        match geometry.cell_at(column, row) {
            Some(pos) => {
                playing.cursor = pos;
                playing.place(pos)
            }
            None => Effect::Nothing,
        }
    }

    /// Redeems a deferred computer move.
    #[instrument(skip(self))]
    pub fn computer_turn(&mut self, ticket: MoveTicket) -> Effect {
        let Screen::Playing(playing) = &mut self.screen else {
            debug!("Computer move arrived outside a game");
            return Effect::Nothing;
        };
        match playing.controller.play_computer(ticket) {
            Ok(Turn::ComputerToMove(next)) => Effect::Schedule(next),
            Ok(_) => Effect::Nothing,
            Err(e) => {
                debug!(error = %e, "Computer move dropped");
                Effect::Nothing
            }
        }
    }

    fn start_game(&mut self, size: BoardSize) -> Effect {
        info!(%size, "Starting game");
        let controller = GameController::new(size, opponent_for(&self.config));
        self.screen = Screen::Playing(Playing::new(controller));
        Effect::Reset(None)
    }
}

fn opponent_for(config: &GameConfig) -> Box<dyn Opponent> {
    match config.seed() {
        Some(seed) => Box::new(RandomOpponent::seeded(*seed)),
        None => Box::new(RandomOpponent::from_entropy()),
    }
}
