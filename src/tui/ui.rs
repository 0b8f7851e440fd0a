//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Playing, Screen};
use crate::games::gomoku::{BoardSize, Cell, Mark, Position, Status, WIN_COUNT};

/// Columns taken by one cell, including the gap to its right.
pub const CELL_WIDTH: u16 = 4;
/// Rows taken by one cell. A 10×10 board fits an 80×24 terminal.
pub const CELL_HEIGHT: u16 = 1;

/// Splits the frame into title, body, status and help areas.
pub fn layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Where each cell of the board lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    area: Rect,
    side: u16,
}

impl BoardGeometry {
    /// Centers a `side`×`side` board in `body`.
    pub fn new(body: Rect, side: usize) -> Self {
        let side = u16::try_from(side).unwrap_or(u16::MAX);
        let width = side.saturating_mul(CELL_WIDTH);
        let height = side.saturating_mul(CELL_HEIGHT);
        Self {
            area: center_rect(body, width, height),
            side,
        }
    }

    /// Geometry for the board as laid out in a full frame of `frame_area`.
    pub fn for_frame(frame_area: Rect, side: usize) -> Self {
        let (_, body, _, _) = layout(frame_area);
        Self::new(body, side)
    }

    /// Screen rectangle of one cell's text.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        let col = u16::try_from(pos.col).unwrap_or(u16::MAX);
        let row = u16::try_from(pos.row).unwrap_or(u16::MAX);
        Rect::new(
            self.area.x.saturating_add(col.saturating_mul(CELL_WIDTH)),
            self.area.y.saturating_add(row.saturating_mul(CELL_HEIGHT)),
            CELL_WIDTH - 1,
            CELL_HEIGHT,
        )
        .intersection(self.area)
    }

    /// Board cell under the terminal coordinates, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        if !self.area.contains((column, row).into()) {
            return None;
        }
        let col = (column - self.area.x) / CELL_WIDTH;
        let row = (row - self.area.y) / CELL_HEIGHT;
        (col < self.side && row < self.side)
            .then(|| Position::new(usize::from(row), usize::from(col)))
    }
}

/// Draws the whole frame for the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let (title_area, body, status_area, help_area) = layout(frame.area());

    let title = match app.screen() {
        Screen::SizeSelect { .. } => "Strictly Gomoku - choose a board".to_string(),
        Screen::Playing(playing) => {
            let size = playing.controller().board().size();
            format!("Strictly Gomoku - {WIN_COUNT} in a row on {size}×{size}")
        }
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, title_area);

    let (status, help) = match app.screen() {
        Screen::SizeSelect { size } => {
            draw_size_select(frame, body, *size);
            (
                "Pick a board size".to_string(),
                "←/→: size | Enter: start | Q: quit",
            )
        }
        Screen::Playing(playing) => {
            draw_board(frame, body, playing);
            (
                status_text(playing),
                "Arrows: move | Enter/Space/click: place X | C: clear | N: new board | Q: quit",
            )
        }
    };

    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, status_area);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, help_area);
}

fn status_text(playing: &Playing) -> String {
    let controller = playing.controller();
    let seats = controller.seats();
    let hint = match controller.status() {
        Status::AwaitingHuman => format!("your move ({})", seats.human),
        Status::AwaitingComputer => format!("computer is thinking ({})", seats.computer),
        Status::Winner(_) | Status::Draw => "press C to clear".to_string(),
    };
    format!("{} - {}", controller.status(), hint)
}

fn draw_size_select(frame: &mut Frame, area: Rect, size: BoardSize) {
    let area = center_rect(area, 36, 5);
    let lines = vec![
        Line::from(format!("Choose the board size ({}-{}):", BoardSize::MIN, BoardSize::MAX)),
        Line::from(""),
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{size} × {size}"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, playing: &Playing) {
    let controller = playing.controller();
    let board = controller.board();
    let geometry = BoardGeometry::new(area, board.side());
    let game_over = controller.is_over();
    let last = controller.last_move().map(|m| m.position);

    for row in 0..board.side() {
        for col in 0..board.side() {
            let pos = Position::new(row, col);
            let Some(cell) = board.get(pos) else {
                continue;
            };
            let (symbol, mut style) = match cell {
                Cell::Empty => ("·", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(Mark::X) => (
                    "X",
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Cell::Occupied(Mark::O) => (
                    "O",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            };

            let winning = controller.win_line().is_some_and(|line| line.contains(pos));
            if winning {
                style = style.bg(Color::Green).fg(Color::Black);
            } else if game_over {
                style = style.add_modifier(Modifier::DIM);
            }
            if last == Some(pos) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if pos == playing.cursor() && !game_over {
                style = style.bg(Color::White).fg(Color::Black);
            }

            let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
                .style(style)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, geometry.cell_rect(pos));
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
