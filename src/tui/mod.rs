//! Terminal UI for Strictly Gomoku

mod app;
mod input;
mod scheduler;
mod ui;

pub use app::{App, Effect, Playing, Screen};
pub use scheduler::ComputerScheduler;
pub use ui::BoardGeometry;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::path::Path;
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::config::GameConfig;
use crate::games::gomoku::{BoardSize, MoveTicket};

/// Sends trace output to `path` so it never draws over the TUI.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Raw mode and the alternate screen, undone on drop.
///
/// Setup failures after raw mode is on still leave the terminal usable.
#[derive(Debug)]
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Restores the terminal, reporting the first failure.
    fn restore(mut self) -> io::Result<()> {
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            warn!("Restoring terminal on early exit");
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}

/// Runs the game in the terminal until the player quits.
///
/// With `size` the game starts immediately, otherwise the size-selection
/// screen comes first.
pub async fn run_tui(config: GameConfig, size: Option<BoardSize>) -> Result<()> {
    init_file_logging(config.log_file())?;
    info!(?size, "Starting Strictly Gomoku TUI");

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (ticket_tx, mut ticket_rx) = mpsc::unbounded_channel();
    let mut scheduler = ComputerScheduler::new(config.computer_delay(), ticket_tx);

    let app = match size {
        Some(size) => App::with_board(config, size),
        None => App::new(config),
    };

    let res = run_app(&mut terminal, app, &mut scheduler, &mut ticket_rx).await;
    scheduler.cancel();

    guard.restore()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Event loop: draw, redeem due computer moves, then handle input.
#[instrument(skip_all)]
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    scheduler: &mut ComputerScheduler,
    ticket_rx: &mut mpsc::UnboundedReceiver<MoveTicket>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(ticket) = ticket_rx.try_recv() {
            let effect = app.computer_turn(ticket);
            apply(effect, scheduler);
        }

        // Short poll keeps the computer's reply close to its delay.
        if !event::poll(Duration::from_millis(30))? {
            tokio::task::yield_now().await;
            continue;
        }

        let effect = match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                app.handle_click(area, mouse.column, mouse.row)
            }
            _ => Effect::Nothing,
        };

        if effect == Effect::Quit {
            return Ok(());
        }
        apply(effect, scheduler);
    }
}

fn apply(effect: Effect, scheduler: &mut ComputerScheduler) {
    match effect {
        Effect::Nothing | Effect::Quit => {}
        Effect::Schedule(ticket) => scheduler.schedule(ticket),
        Effect::Reset(next) => {
            debug!(reschedule = next.is_some(), "Resetting computer schedule");
            scheduler.cancel();
            if let Some(ticket) = next {
                scheduler.schedule(ticket);
            }
        }
    }
}
