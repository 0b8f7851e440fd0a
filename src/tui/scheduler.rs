//! Deferred computer moves.
//!
//! The computer answers after a short pause so the player can see their own
//! mark land first. Each pause is a one-shot tokio task that hands the
//! ticket back to the event loop through a channel.

use crate::games::gomoku::MoveTicket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, instrument};

/// Schedules at most one pending computer move.
#[derive(Debug)]
pub struct ComputerScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<MoveTicket>,
    pending: Option<JoinHandle<()>>,
}

impl ComputerScheduler {
    /// Creates a scheduler delivering tickets to `tx` after `delay`.
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<MoveTicket>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Delivers `ticket` after the delay, replacing any pending move.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, ticket: MoveTicket) {
        self.cancel();
        let delay = self.delay;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            if tx.send(ticket).is_err() {
                debug!("Event loop gone, dropping computer move");
            }
        }));
    }

    /// Aborts the pending move, if any.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling pending computer move");
            handle.abort();
        }
    }

    /// Whether a move is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ComputerScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
