use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OthelloError, Result};

/// Stone color. `Black` (`X`) moves first, `White` (`O`) second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "X")]
    Black,
    #[serde(rename = "O")]
    White,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Parses the single-letter wire token (`X` or `O`).
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "X" => Ok(Self::Black),
            "O" => Ok(Self::White),
            _ => Err(OthelloError::InvalidColorToken(token.to_string())),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Black => 'X',
            Self::White => 'O',
        }
    }

    pub fn to_square(self) -> Square {
        match self {
            Self::Black => Square::Black,
            Self::White => Square::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Color {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_token(s)
    }
}

/// Occupancy of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Empty,
    Black,
    White,
}

impl Square {
    /// Swaps the stone color; empty stays empty.
    pub fn flip(self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Decodes one character of the 64-character board encoding.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Empty),
            'X' => Some(Self::Black),
            'O' => Some(Self::White),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Black => 'X',
            Self::White => 'O',
        }
    }
}

impl From<Color> for Square {
    fn from(color: Color) -> Self {
        color.to_square()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
