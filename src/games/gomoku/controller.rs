//! Turn sequencing between the human and the computer.
//!
//! The controller owns the board for one session. The human always plays
//! X and the computer always plays O; which side opens alternates every
//! time the board is cleared.
//!
//! The computer never moves synchronously. When it is its turn the
//! controller hands out a [`MoveTicket`] and waits for the caller to
//! redeem it with [`GameController::play_computer`]. Clearing the board
//! bumps a generation counter, so tickets issued before the clear are
//! refused instead of landing on the fresh board.

use super::action::{Move, MoveError};
use super::rules::WinLine;
use super::{Board, BoardSize, Mark, Position};
use crate::players::Opponent;
use derive_more::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, instrument, warn};

static NEXT_SESSION: AtomicU64 = AtomicU64::new(0);

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Side {
    /// The person at the keyboard.
    #[display("human")]
    Human,
    /// The random opponent.
    #[display("computer")]
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Which mark each side plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seats {
    /// Mark placed by the human.
    pub human: Mark,
    /// Mark placed by the computer.
    pub computer: Mark,
}

impl Seats {
    /// Mark belonging to `side`.
    pub fn mark_of(self, side: Side) -> Mark {
        match side {
            Side::Human => self.human,
            Side::Computer => self.computer,
        }
    }
}

impl Default for Seats {
    fn default() -> Self {
        Self {
            human: Mark::X,
            computer: Mark::O,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A side completed a line.
    Winner(Side),
    /// The board filled up without a line.
    Draw,
}

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for a cell from the human.
    AwaitingHuman,
    /// A computer move is scheduled.
    AwaitingComputer,
    /// No more moves until the board is cleared.
    GameOver(Outcome),
}

/// Status line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// Human to move.
    #[display("awaiting human")]
    AwaitingHuman,
    /// Computer to move.
    #[display("awaiting computer")]
    AwaitingComputer,
    /// Someone won.
    #[display("winner: {}", _0)]
    Winner(Side),
    /// Board exhausted.
    #[display("draw")]
    Draw,
}

/// Permission to make one deferred computer move.
///
/// Only valid for the controller and board generation that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveTicket {
    session: u64,
    generation: u64,
}

/// What the caller has to do after a move or a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Wait for the human.
    HumanToMove,
    /// Schedule the computer with this ticket.
    ComputerToMove(MoveTicket),
    /// The game has ended.
    Finished(Outcome),
}

/// Game controller for one session.
pub struct GameController {
    board: Board,
    phase: Phase,
    first_mover: Side,
    seats: Seats,
    session: u64,
    generation: u64,
    opponent: Box<dyn Opponent>,
    last_move: Option<Move>,
    win_line: Option<WinLine>,
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("size", &self.board.size())
            .field("phase", &self.phase)
            .field("first_mover", &self.first_mover)
            .field("generation", &self.generation)
            .field("opponent", &self.opponent.name())
            .finish()
    }
}

impl GameController {
    /// Starts a session on an empty board with the human to move.
    #[instrument(skip(opponent), fields(opponent = opponent.name()))]
    pub fn new(size: BoardSize, opponent: Box<dyn Opponent>) -> Self {
        info!("New game session");
        Self {
            board: Board::new(size),
            phase: Phase::AwaitingHuman,
            first_mover: Side::Human,
            seats: Seats::default(),
            session: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            generation: 0,
            opponent,
            last_move: None,
            win_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side that opened the current game.
    pub fn first_mover(&self) -> Side {
        self.first_mover
    }

    /// Mark assignment.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Most recent move on the current board.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Winning line, once someone has won.
    pub fn win_line(&self) -> Option<&WinLine> {
        self.win_line.as_ref()
    }

    /// Whether input should be disabled until the next clear.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Status for the status line.
    pub fn status(&self) -> Status {
        match self.phase {
            Phase::AwaitingHuman => Status::AwaitingHuman,
            Phase::AwaitingComputer => Status::AwaitingComputer,
            Phase::GameOver(Outcome::Winner(side)) => Status::Winner(side),
            Phase::GameOver(Outcome::Draw) => Status::Draw,
        }
    }

    /// Places the human's mark.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] after the game ended,
    /// [`MoveError::NotYourTurn`] while the computer is to move, and the
    /// board's placement errors for bad cells. The state is unchanged on
    /// error.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play_human(&mut self, pos: Position) -> Result<Turn, MoveError> {
        match self.phase {
            Phase::AwaitingHuman => {}
            Phase::AwaitingComputer => return Err(MoveError::NotYourTurn),
            Phase::GameOver(_) => return Err(MoveError::GameOver),
        }

        self.place(Side::Human, pos)?;
        let turn = self.settle(Side::Human, pos);
        debug!(?turn, "Human move settled");
        Ok(turn)
    }

    /// Lets the computer move, if `ticket` is still current.
    ///
    /// A pick that is off the board or already taken is replaced by the
    /// first empty cell. With no empty cell left the game ends in a draw.
    ///
    /// # Errors
    ///
    /// [`MoveError::StaleTicket`] for a ticket issued before the last
    /// clear or by another controller, [`MoveError::NotYourTurn`] outside
    /// the computer's turn, and the board's placement errors if the
    /// opponent picks a bad cell.
    #[instrument(skip(self), fields(phase = ?self.phase, generation = self.generation))]
    pub fn play_computer(&mut self, ticket: MoveTicket) -> Result<Turn, MoveError> {
        if ticket.session != self.session || ticket.generation != self.generation {
            warn!(
                ticket_generation = ticket.generation,
                "Discarding computer move from an earlier board"
            );
            return Err(MoveError::StaleTicket);
        }
        if self.phase != Phase::AwaitingComputer {
            return Err(MoveError::NotYourTurn);
        }

        let choice = self
            .opponent
            .choose(&self.board)
            .filter(|pos| self.board.is_empty(*pos))
            .or_else(|| {
                let fallback = self.board.empty_cells().first().copied();
                if fallback.is_some() {
                    warn!(
                        opponent = self.opponent.name(),
                        "Opponent chose an unavailable cell"
                    );
                }
                fallback
            });
        let Some(pos) = choice else {
            info!("No empty cells left for the computer");
            return Ok(self.finish(Outcome::Draw));
        };

        self.place(Side::Computer, pos)?;
        let turn = self.settle(Side::Computer, pos);
        debug!(?turn, "Computer move settled");
        Ok(turn)
    }

    /// Empties the board and swaps who opens.
    ///
    /// Any outstanding ticket becomes stale. Returns a fresh ticket when the
    /// computer opens the new game.
    #[instrument(skip(self), fields(first_mover = %self.first_mover))]
    pub fn clear(&mut self) -> Option<MoveTicket> {
        self.board.reset();
        self.generation += 1;
        self.first_mover = self.first_mover.other();
        self.last_move = None;
        self.win_line = None;
        info!(opens = %self.first_mover, generation = self.generation, "Board cleared");

        match self.first_mover {
            Side::Human => {
                self.phase = Phase::AwaitingHuman;
                None
            }
            Side::Computer => {
                self.phase = Phase::AwaitingComputer;
                Some(self.ticket())
            }
        }
    }

    fn ticket(&self) -> MoveTicket {
        MoveTicket {
            session: self.session,
            generation: self.generation,
        }
    }

    fn place(&mut self, side: Side, pos: Position) -> Result<(), MoveError> {
        let mark = self.seats.mark_of(side);
        self.board.place_mark(pos, mark)?;
        self.last_move = Some(Move::new(mark, pos));
        Ok(())
    }

    fn settle(&mut self, mover: Side, pos: Position) -> Turn {
        if let Some(line) = self.board.winning_line(pos) {
            info!(winner = %mover, direction = %line.direction(), "Line completed");
            self.win_line = Some(line);
            return self.finish(Outcome::Winner(mover));
        }
        if self.board.is_full() {
            return self.finish(Outcome::Draw);
        }
        match mover {
            Side::Human => {
                self.phase = Phase::AwaitingComputer;
                Turn::ComputerToMove(self.ticket())
            }
            Side::Computer => {
                self.phase = Phase::AwaitingHuman;
                Turn::HumanToMove
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Turn {
        info!(?outcome, "Game over");
        debug!(board = %self.board.display(), "Final board");
        self.phase = Phase::GameOver(outcome);
        Turn::Finished(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::Cell;
    use crate::players::ScriptedOpponent;

    fn controller(n: u8, script: &[(usize, usize)]) -> GameController {
        let opponent = ScriptedOpponent::new(script.iter().map(|&(r, c)| Position::new(r, c)));
        GameController::new(BoardSize::new(n).unwrap(), Box::new(opponent))
    }

    fn expect_ticket(turn: Turn) -> MoveTicket {
        match turn {
            Turn::ComputerToMove(ticket) => ticket,
            other => panic!("expected computer turn, got {other:?}"),
        }
    }

    #[test]
    fn test_starts_awaiting_human() {
        let game = controller(5, &[]);
        assert_eq!(game.phase(), Phase::AwaitingHuman);
        assert_eq!(game.first_mover(), Side::Human);
        assert_eq!(game.status().to_string(), "awaiting human");
        assert!(!game.is_over());
    }

    #[test]
    fn test_human_then_computer() {
        let mut game = controller(5, &[(4, 4)]);
        let ticket = expect_ticket(game.play_human(Position::new(0, 0)).unwrap());
        assert_eq!(game.status().to_string(), "awaiting computer");
        assert_eq!(game.play_human(Position::new(1, 1)), Err(MoveError::NotYourTurn));

        assert_eq!(game.play_computer(ticket), Ok(Turn::HumanToMove));
        assert_eq!(
            game.last_move(),
            Some(Move::new(Mark::O, Position::new(4, 4)))
        );
        assert_eq!(game.play_computer(ticket), Err(MoveError::NotYourTurn));
    }

    #[test]
    fn test_occupied_cell_rejected_without_state_change() {
        let mut game = controller(5, &[(4, 4)]);
        let ticket = expect_ticket(game.play_human(Position::new(2, 2)).unwrap());
        game.play_computer(ticket).unwrap();
        assert_eq!(
            game.play_human(Position::new(4, 4)),
            Err(MoveError::SquareOccupied(Position::new(4, 4)))
        );
        assert_eq!(game.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_human_wins_and_input_locks() {
        let mut game = controller(5, &[(4, 0), (4, 1), (4, 2)]);
        for col in 0..3 {
            let ticket = expect_ticket(game.play_human(Position::new(2, col)).unwrap());
            game.play_computer(ticket).unwrap();
        }
        let turn = game.play_human(Position::new(2, 3)).unwrap();
        assert_eq!(turn, Turn::Finished(Outcome::Winner(Side::Human)));
        assert_eq!(game.status().to_string(), "winner: human");
        assert!(game.is_over());
        assert_eq!(game.win_line().map(|l| l.cells().len()), Some(4));
        assert_eq!(game.play_human(Position::new(0, 0)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_computer_wins() {
        let mut game = controller(4, &[(3, 0), (3, 1), (3, 2), (3, 3)]);
        let moves = [(0, 0), (0, 2), (1, 1), (1, 3)];
        let mut last = Turn::HumanToMove;
        for (r, c) in moves {
            let ticket = expect_ticket(game.play_human(Position::new(r, c)).unwrap());
            last = game.play_computer(ticket).unwrap();
        }
        assert_eq!(last, Turn::Finished(Outcome::Winner(Side::Computer)));
        assert_eq!(game.status().to_string(), "winner: computer");
    }

    #[test]
    fn test_clear_alternates_first_mover() {
        let mut game = controller(5, &[]);
        let ticket = game.clear().expect("computer opens after first clear");
        assert_eq!(game.first_mover(), Side::Computer);
        assert_eq!(game.phase(), Phase::AwaitingComputer);
        assert_eq!(game.play_human(Position::new(0, 0)), Err(MoveError::NotYourTurn));
        assert_eq!(game.play_computer(ticket), Ok(Turn::HumanToMove));
        assert_eq!(game.seats().computer, Mark::O);

        assert_eq!(game.clear(), None);
        assert_eq!(game.first_mover(), Side::Human);
        assert_eq!(game.phase(), Phase::AwaitingHuman);
        assert_eq!(game.board().empty_cells().len(), 25);
    }

    #[test]
    fn test_clear_invalidates_pending_ticket() {
        let mut game = controller(5, &[]);
        let stale = expect_ticket(game.play_human(Position::new(0, 0)).unwrap());
        let fresh = game.clear().unwrap();
        assert_eq!(game.play_computer(stale), Err(MoveError::StaleTicket));
        assert_eq!(game.board().empty_cells().len(), 25);
        assert!(game.play_computer(fresh).is_ok());
    }

    #[test]
    fn test_ticket_from_other_session_is_stale() {
        let mut first = controller(5, &[]);
        let mut second = controller(5, &[]);
        let ticket = expect_ticket(first.play_human(Position::new(0, 0)).unwrap());
        expect_ticket(second.play_human(Position::new(0, 0)).unwrap());
        assert_eq!(second.play_computer(ticket), Err(MoveError::StaleTicket));
    }

    struct Stubborn(Position);

    impl Opponent for Stubborn {
        fn choose(&mut self, _board: &Board) -> Option<Position> {
            Some(self.0)
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    #[test]
    fn test_unavailable_pick_falls_back_to_empty_cell() {
        let mut game = GameController::new(
            BoardSize::new(4).unwrap(),
            Box::new(Stubborn(Position::new(0, 0))),
        );
        let ticket = expect_ticket(game.play_human(Position::new(0, 0)).unwrap());
        assert_eq!(game.play_computer(ticket), Ok(Turn::HumanToMove));
        assert_eq!(game.last_move(), Some(Move::new(Mark::O, Position::new(0, 1))));
        assert_eq!(game.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_off_board_pick_falls_back_to_empty_cell() {
        let mut game = GameController::new(
            BoardSize::new(4).unwrap(),
            Box::new(Stubborn(Position::new(9, 9))),
        );
        let ticket = expect_ticket(game.play_human(Position::new(3, 3)).unwrap());
        assert_eq!(game.play_computer(ticket), Ok(Turn::HumanToMove));
        assert_eq!(
            game.board().get(Position::new(0, 0)),
            Some(Cell::Occupied(Mark::O))
        );
    }

    #[test]
    fn test_clear_reenables_after_game_over() {
        let mut game = controller(5, &[(4, 0), (4, 1), (4, 2)]);
        for col in 0..3 {
            let ticket = expect_ticket(game.play_human(Position::new(0, col)).unwrap());
            game.play_computer(ticket).unwrap();
        }
        game.play_human(Position::new(0, 3)).unwrap();
        assert!(game.is_over());
        game.clear();
        assert!(!game.is_over());
        assert!(game.win_line().is_none());
        assert!(game.last_move().is_none());
    }
}
