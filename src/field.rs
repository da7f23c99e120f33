use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{OthelloError, Result};

pub const ROWS: usize = 8;
pub const COLS: usize = 8;
pub const FIELDS: usize = ROWS * COLS;

/// One of the 64 board cells, `A1` (index 0) through `H8` (index 63).
///
/// ```text
///      a  b  c  d  e  f  g  h
///   1  0  1  2  3  4  5  6  7
///   2  8  9 10 11 12 13 14 15
///   ...
///   8 56 57 58 59 60 61 62 63
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Field(u8);

impl Field {
    pub fn new(index: usize) -> Option<Self> {
        (index < FIELDS).then_some(Self(index as u8))
    }

    /// Inverse of [`Field::row`] / [`Field::col`].
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= ROWS || col >= COLS {
            return None;
        }
        Some(Self((row * COLS + col) as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / COLS
    }

    pub fn col(self) -> usize {
        self.index() % COLS
    }

    /// All fields in index (row-major) order.
    pub fn all() -> impl Iterator<Item = Field> {
        (0..FIELDS as u8).map(Self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.col() as u8) as char;
        write!(f, "{}{}", letter, self.row() + 1)
    }
}

impl FromStr for Field {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || OthelloError::MalformedInput(format!("invalid field token {s:?}"));

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(malformed());
        }

        let col = match bytes[0].to_ascii_uppercase() {
            c @ b'A'..=b'H' => (c - b'A') as usize,
            _ => return Err(malformed()),
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => (r - b'1') as usize,
            _ => return Err(malformed()),
        };

        Self::from_row_col(row, col).ok_or_else(malformed)
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
