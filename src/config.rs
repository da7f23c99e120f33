use std::str::FromStr;

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::ai::{MinimaxPlayer, Player, RandomPlayer, SquareValuationPlayer};
use crate::error::{OthelloError, Result};

pub const DEFAULT_DEPTH: u8 = 3;

/// Player configuration as accepted from callers, e.g.
/// `{"kind": "minimax", "depth": 5, "timeout_ms": 500}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerSpec {
    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
    SquareValuation,
    Minimax {
        #[serde(default = "default_depth")]
        depth: u8,
        #[serde(default)]
        timeout_ms: Option<u64>,
    },
}

fn default_depth() -> u8 {
    DEFAULT_DEPTH
}

impl Default for PlayerSpec {
    fn default() -> Self {
        Self::Minimax {
            depth: DEFAULT_DEPTH,
            timeout_ms: None,
        }
    }
}

impl PlayerSpec {
    pub fn build(&self, id: &str) -> Box<dyn Player> {
        match *self {
            Self::Random { seed: Some(seed) } => Box::new(RandomPlayer::with_seed(id, seed)),
            Self::Random { seed: None } => Box::new(RandomPlayer::new(id)),
            Self::SquareValuation => Box::new(SquareValuationPlayer::new(id)),
            Self::Minimax {
                depth,
                timeout_ms: Some(ms),
            } => Box::new(MinimaxPlayer::with_timeout(
                id,
                depth,
                Duration::from_millis(ms),
            )),
            Self::Minimax {
                depth,
                timeout_ms: None,
            } => Box::new(MinimaxPlayer::new(id, depth)),
        }
    }
}

/// Short form used on command lines: `random[:seed]`, `square`,
/// `minimax[:depth[:timeout_ms]]`.
impl FromStr for PlayerSpec {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let kind = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let number = |idx: usize| -> Result<Option<u64>> {
            args.get(idx)
                .map(|arg| {
                    arg.parse::<u64>().map_err(|_| {
                        OthelloError::MalformedInput(format!("invalid number {arg:?} in {s:?}"))
                    })
                })
                .transpose()
        };

        let spec = match (kind, args.len()) {
            ("random", 0 | 1) => Self::Random { seed: number(0)? },
            ("square" | "square_valuation", 0) => Self::SquareValuation,
            ("minimax", 0..=2) => {
                let depth = match number(0)? {
                    Some(depth) => u8::try_from(depth).map_err(|_| {
                        OthelloError::MalformedInput(format!("depth {depth} is out of range"))
                    })?,
                    None => DEFAULT_DEPTH,
                };
                Self::Minimax {
                    depth,
                    timeout_ms: number(1)?,
                }
            }
            _ => {
                return Err(OthelloError::MalformedInput(format!(
                    "unknown player spec {s:?}"
                )));
            }
        };
        Ok(spec)
    }
}
