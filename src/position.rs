use std::fmt;

use crate::board::Board;
use crate::error::{OthelloError, Result};
use crate::field::Field;
use crate::movegen::MoveGenerator;
use crate::square::{Color, Square};
use crate::status::Status;

/// Full game state: board occupancy plus the color entitled to move next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    to_move: Color,
}

impl Position {
    /// Canonical starting layout with X to move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            to_move: Color::Black,
        }
    }

    pub fn new(board: Board, to_move: Color) -> Self {
        Self { board, to_move }
    }

    /// Parses the 64-character board encoding. The encoding carries no
    /// side-to-move information, so it is supplied separately.
    pub fn from_ascii(text: &str, to_move: Color) -> Result<Self> {
        Ok(Self::new(Board::from_ascii(text)?, to_move))
    }

    pub fn to_ascii(&self) -> String {
        self.board.to_ascii()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn square_at(&self, field: Field) -> Square {
        self.board.get(field)
    }

    pub fn count(&self, color: Color) -> u8 {
        self.board.count(color)
    }

    pub fn occupied_count(&self) -> u8 {
        self.board.occupied_count()
    }

    pub fn empty_fields(&self) -> Vec<Field> {
        Field::all()
            .filter(|&field| self.board.get(field).is_empty())
            .collect()
    }

    /// Legal moves for the side to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Field> {
        self.generator().legal_moves()
    }

    /// Opponent stones that playing `field` would flip.
    pub fn flips(&self, field: Field) -> Vec<Field> {
        self.generator().flips(field)
    }

    /// Returns the position after `field` is played, leaving `self` untouched.
    pub fn apply_move(&self, field: Field) -> Result<Self> {
        let mut next = *self;
        next.make_move(field)?;
        Ok(next)
    }

    /// Returns the position after a forced pass, leaving `self` untouched.
    pub fn apply_pass(&self) -> Result<Self> {
        let mut next = *self;
        next.make_pass()?;
        Ok(next)
    }

    /// Plays `field` in place and returns the flipped fields.
    ///
    /// Fails with `IllegalMove` without touching the board when the
    /// destination is occupied or captures nothing.
    pub fn make_move(&mut self, field: Field) -> Result<Vec<Field>> {
        if !self.board.get(field).is_empty() {
            return Err(OthelloError::IllegalMove(format!(
                "{field} is already occupied"
            )));
        }

        let flips = self.flips(field);
        if flips.is_empty() {
            return Err(OthelloError::IllegalMove(format!(
                "{field} captures nothing for {}",
                self.to_move
            )));
        }

        for &flipped in &flips {
            self.board.set(flipped, self.board.get(flipped).flip());
        }
        self.board.set(field, self.to_move.to_square());
        self.to_move = self.to_move.opposite();

        Ok(flips)
    }

    /// Hands the turn to the opponent without touching the board.
    /// Only allowed when the side to move has no legal move.
    pub fn make_pass(&mut self) -> Result<()> {
        if self.generator().has_legal_move() {
            return Err(OthelloError::IllegalMove(format!(
                "{} cannot pass while a legal move exists",
                self.to_move
            )));
        }
        self.to_move = self.to_move.opposite();
        Ok(())
    }

    pub fn generate_status(&self) -> Status {
        let moves = self.legal_moves();
        if !moves.is_empty() {
            return Status::MovesAvailable { moves };
        }

        let replies = MoveGenerator::new(&self.board, self.to_move.opposite()).legal_moves();
        if !replies.is_empty() {
            return Status::OneSidedPass { moves: replies };
        }

        let (black, white) = self.board.counts();
        Status::finished(i32::from(black) - i32::from(white))
    }

    fn generator(&self) -> MoveGenerator {
        MoveGenerator::new(&self.board, self.to_move)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
