use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::Player;
use crate::field::Field;
use crate::position::Position;

/// Picks uniformly among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(id: &str) -> Self {
        Self::with_rng(id, StdRng::from_entropy())
    }

    /// Reproducible player for tests and benchmarks.
    pub fn with_seed(id: &str, seed: u64) -> Self {
        Self::with_rng(id, StdRng::seed_from_u64(seed))
    }

    fn with_rng(id: &str, rng: StdRng) -> Self {
        Self {
            name: format!("RandomPlayer_{id}"),
            rng,
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn best_move(&mut self, _position: &Position, moves: &[Field]) -> Option<Field> {
        moves.choose(&mut self.rng).copied()
    }
}
