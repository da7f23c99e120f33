use std::fmt;

use crate::error::{OthelloError, Result};
use crate::field::{COLS, FIELDS, Field, ROWS};
use crate::square::{Color, Square};

/// Othello board state: 64 squares, row-major, `A1` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Square; FIELDS],
}

impl Board {
    /// Creates the initial board:
    /// d4=O, e4=X, d5=X, e5=O.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.squares[3 * COLS + 3] = Square::White;
        board.squares[4 * COLS + 4] = Square::White;
        board.squares[3 * COLS + 4] = Square::Black;
        board.squares[4 * COLS + 3] = Square::Black;
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [Square::Empty; FIELDS],
        }
    }

    /// Decodes the 64-character `.`/`X`/`O` encoding.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let len = text.chars().count();
        if len != FIELDS {
            return Err(OthelloError::MalformedInput(format!(
                "board text must be {FIELDS} characters, got {len}"
            )));
        }

        let mut board = Self::empty();
        for (idx, c) in text.chars().enumerate() {
            board.squares[idx] = Square::from_char(c).ok_or_else(|| {
                OthelloError::MalformedInput(format!("invalid square character {c:?} at index {idx}"))
            })?;
        }
        Ok(board)
    }

    pub fn to_ascii(&self) -> String {
        self.squares.iter().map(|sq| sq.to_char()).collect()
    }

    pub fn get(&self, field: Field) -> Square {
        self.squares[field.index()]
    }

    pub fn set(&mut self, field: Field, square: Square) {
        self.squares[field.index()] = square;
    }

    pub fn squares(&self) -> &[Square; FIELDS] {
        &self.squares
    }

    pub fn count(&self, color: Color) -> u8 {
        let target = color.to_square();
        self.squares.iter().filter(|&&sq| sq == target).count() as u8
    }

    /// Returns `(black_count, white_count)`.
    pub fn counts(&self) -> (u8, u8) {
        (self.count(Color::Black), self.count(Color::White))
    }

    pub fn occupied_count(&self) -> u8 {
        let (black, white) = self.counts();
        black + white
    }

    pub fn empty_count(&self) -> u8 {
        FIELDS as u8 - self.occupied_count()
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=X, 2=O.
    pub fn to_array(&self) -> [u8; FIELDS] {
        let mut out = [0u8; FIELDS];
        for (cell, square) in out.iter_mut().zip(self.squares.iter()) {
            *cell = match square {
                Square::Empty => 0,
                Square::Black => 1,
                Square::White => 2,
            };
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            let line: Vec<String> = (0..COLS)
                .map(|col| self.squares[row * COLS + col].to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
