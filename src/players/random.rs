//! Uniform-random opponent.

use super::Opponent;
use crate::games::gomoku::{Board, Position};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Picks uniformly among the empty cells.
///
/// The random source is owned and injected, so a seeded generator replays
/// the same game.
#[derive(Debug)]
pub struct RandomOpponent<R = ChaCha8Rng> {
    name: String,
    rng: R,
}

impl<R: Rng + Send> RandomOpponent<R> {
    /// Creates an opponent drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl RandomOpponent<ChaCha8Rng> {
    /// Reproducible opponent for a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new("Computer", ChaCha8Rng::seed_from_u64(seed))
    }

    /// Opponent seeded from OS entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new("Computer", ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng + Send> Opponent for RandomOpponent<R> {
    fn choose(&mut self, board: &Board) -> Option<Position> {
        let choice = board.empty_cells().choose(&mut self.rng).copied();
        debug!(opponent = %self.name, ?choice, "Random opponent chose");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}
