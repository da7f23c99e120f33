use serde::Serialize;

use crate::field::Field;
use crate::square::Color;

/// What the side to move has to do next. Always derived fresh from a
/// `Position`; a `Status` must not outlive the position it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Status {
    /// The side to move has at least one legal move.
    MovesAvailable { moves: Vec<Field> },
    /// The side to move must pass; `moves` are the opponent's replies.
    OneSidedPass { moves: Vec<Field> },
    /// Neither side can move. `differential` is X stones minus O stones;
    /// `winner` is `None` on a draw.
    Finished {
        differential: i32,
        winner: Option<Color>,
    },
}

impl Status {
    pub fn finished(differential: i32) -> Self {
        let winner = match differential.signum() {
            1 => Some(Color::Black),
            -1 => Some(Color::White),
            _ => None,
        };
        Self::Finished {
            differential,
            winner,
        }
    }

    /// Legal moves carried by this status; empty once the game is finished.
    pub fn moves(&self) -> &[Field] {
        match self {
            Self::MovesAvailable { moves } | Self::OneSidedPass { moves } => moves,
            Self::Finished { .. } => &[],
        }
    }

    pub fn is_pass_forced(&self) -> bool {
        matches!(self, Self::OneSidedPass { .. })
    }

    pub fn is_game_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            Self::Finished { winner, .. } => *winner,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_winner_follows_differential_sign() {
        assert_eq!(Status::finished(10).winner(), Some(Color::Black));
        assert_eq!(Status::finished(-2).winner(), Some(Color::White));
        assert_eq!(Status::finished(0).winner(), None);
        assert!(Status::finished(0).is_game_finished());
        assert!(Status::finished(0).moves().is_empty());
    }

    #[test]
    fn flags_are_mutually_exclusive() {
        let d3: Field = "D3".parse().unwrap();
        let available = Status::MovesAvailable { moves: vec![d3] };
        let pass = Status::OneSidedPass { moves: vec![d3] };

        assert!(!available.is_pass_forced() && !available.is_game_finished());
        assert!(pass.is_pass_forced() && !pass.is_game_finished());
        assert_eq!(pass.moves(), &[d3]);
        assert_eq!(pass.winner(), None);
    }
}
