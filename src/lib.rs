//! Othello/Reversi rules engine and move-selection strategies.
//!
//! ```
//! use othello::{Color, Position, Status};
//!
//! let pos = Position::from_ascii(
//!     "...........................OX......XO...........................",
//!     Color::Black,
//! )
//! .unwrap();
//! let moves: Vec<String> = pos.legal_moves().iter().map(|f| f.to_string()).collect();
//! assert_eq!(moves, ["D3", "C4", "F5", "E6"]);
//!
//! let next = pos.apply_move("D3".parse().unwrap()).unwrap();
//! assert!(matches!(next.generate_status(), Status::MovesAvailable { .. }));
//! ```

pub mod ai;
pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod field;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod position;
pub mod square;
pub mod status;
pub mod types;

pub use ai::{MinimaxPlayer, Player, RandomPlayer, SquareValuationPlayer};
pub use board::Board;
pub use error::{OthelloError, Result};
pub use field::Field;
pub use position::Position;
pub use square::{Color, Square};
pub use status::Status;

/// Parses the 64-character board encoding with an out-of-band side to move.
pub fn parse_position(text: &str, to_move: Color) -> Result<Position> {
    Position::from_ascii(text, to_move)
}
