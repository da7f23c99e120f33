//! Move-selection strategies.

mod random;
mod search;
mod valuation;
pub mod weights;

pub use random::RandomPlayer;
pub use search::{MinimaxPlayer, WIN, negamax_score};
pub use valuation::SquareValuationPlayer;

use crate::field::Field;
use crate::position::Position;

/// A move-selection policy.
///
/// `moves` is the legal-move list of `position`, in board scan order.
/// Returns `None` only when `moves` is empty.
pub trait Player: Send {
    fn name(&self) -> &str;

    fn best_move(&mut self, position: &Position, moves: &[Field]) -> Option<Field>;
}
