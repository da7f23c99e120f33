use serde::Serialize;

use crate::field::Field;
use crate::position::Position;
use crate::square::Color;

/// Public position snapshot returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionView {
    /// 64-character `.`/`X`/`O` encoding.
    pub pos: String,
    pub to_move: Color,
    /// 0=empty, 1=X, 2=O.
    pub board: Vec<u8>,
    pub x_count: u8,
    pub o_count: u8,
    /// Legal moves of `to_move`.
    pub moves: Vec<Field>,
    /// Contract:
    /// - Normal move: fields flipped by the move that produced this position.
    /// - Pass or fresh position: must be an empty list.
    pub flipped: Vec<Field>,
}

impl PositionView {
    pub fn new(position: &Position, flipped: Vec<Field>) -> Self {
        let (x_count, o_count) = position.board().counts();
        Self {
            pos: position.to_ascii(),
            to_move: position.to_move(),
            board: position.board().to_array().to_vec(),
            x_count,
            o_count,
            moves: position.legal_moves(),
            flipped,
        }
    }
}

/// One row of a perft table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerftRow {
    pub depth: u32,
    pub nodes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_of_initial_position() {
        let view = PositionView::new(&Position::initial(), Vec::new());

        assert_eq!(view.to_move, Color::Black);
        assert_eq!((view.x_count, view.o_count), (2, 2));
        assert_eq!(view.moves.len(), 4);
        assert_eq!(view.board.len(), 64);
        assert!(view.flipped.is_empty());
    }

    #[test]
    fn view_serializes_fields_and_colors_as_tokens() {
        let view = PositionView::new(&Position::initial(), vec!["D4".parse().unwrap()]);

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["to_move"], "X");
        assert_eq!(json["moves"][0], "D3");
        assert_eq!(json["flipped"][0], "D4");
    }
}
