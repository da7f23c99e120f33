use super::Player;
use super::weights::weight;
use crate::field::Field;
use crate::position::Position;

/// Plays the legal move on the highest-weighted square; the earliest
/// move in the list wins ties.
#[derive(Debug, Clone)]
pub struct SquareValuationPlayer {
    name: String,
}

impl SquareValuationPlayer {
    pub fn new(id: &str) -> Self {
        Self {
            name: format!("SquareValuationPlayer_{id}"),
        }
    }
}

impl Player for SquareValuationPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn best_move(&mut self, _position: &Position, moves: &[Field]) -> Option<Field> {
        let mut best: Option<(Field, i32)> = None;
        for &mv in moves {
            let value = weight(mv);
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }
        best.map(|(mv, _)| mv)
    }
}
