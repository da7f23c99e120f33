use std::fmt;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::ai::Player;
use crate::error::{OthelloError, Result};
use crate::field::Field;
use crate::position::Position;
use crate::square::Color;
use crate::status::Status;

/// One ply of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Turn {
    Move {
        color: Color,
        field: Field,
        flipped: Vec<Field>,
    },
    Pass {
        color: Color,
    },
}

/// A game in progress: the current position plus every ply played so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    history: Vec<Turn>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::initial())
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn status(&self) -> Status {
        self.position.generate_status()
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_game_finished()
    }

    pub fn play(&mut self, field: Field) -> Result<&Turn> {
        let color = self.position.to_move();
        let flipped = self.position.make_move(field)?;
        Ok(self.record(Turn::Move {
            color,
            field,
            flipped,
        }))
    }

    pub fn pass(&mut self) -> Result<&Turn> {
        let color = self.position.to_move();
        self.position.make_pass()?;
        Ok(self.record(Turn::Pass { color }))
    }

    /// Performs the next Status-driven transition: asks `player` for a move
    /// when moves exist, passes when forced. Returns `None` once finished.
    pub fn advance(&mut self, player: &mut dyn Player) -> Result<Option<&Turn>> {
        match self.status() {
            Status::Finished { .. } => Ok(None),
            Status::OneSidedPass { .. } => self.pass().map(Some),
            Status::MovesAvailable { moves } => {
                let field = player.best_move(&self.position, &moves).ok_or_else(|| {
                    OthelloError::IllegalMove(format!("{} returned no move", player.name()))
                })?;
                self.play(field).map(Some)
            }
        }
    }

    fn record(&mut self, turn: Turn) -> &Turn {
        self.history.push(turn);
        let last = self.history.len() - 1;
        &self.history[last]
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub winner: Option<Color>,
    /// X stones minus O stones.
    pub differential: i32,
    pub plies: usize,
    pub passes: usize,
    pub history: Vec<Turn>,
    pub final_position: String,
}

/// Plays one game from the initial position; `black` moves first.
pub fn play_game(black: &mut dyn Player, white: &mut dyn Player) -> Result<GameRecord> {
    let mut game = Game::new();

    let (winner, differential) = loop {
        if let Status::Finished {
            winner,
            differential,
        } = game.status()
        {
            break (winner, differential);
        }

        trace!("\n{}", game.position());
        let player: &mut dyn Player = match game.position().to_move() {
            Color::Black => &mut *black,
            Color::White => &mut *white,
        };
        game.advance(player)?;
    };
    let passes = game
        .history()
        .iter()
        .filter(|turn| matches!(turn, Turn::Pass { .. }))
        .count();

    debug!(
        black = black.name(),
        white = white.name(),
        ?winner,
        differential,
        "game finished"
    );

    Ok(GameRecord {
        winner,
        differential,
        plies: game.history().len(),
        passes,
        final_position: game.position().to_ascii(),
        history: game.history,
    })
}

/// Win/draw counts of a two-player match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchTally {
    pub names: [String; 2],
    pub wins: [u32; 2],
    pub draws: u32,
    pub games: u32,
}

impl MatchTally {
    /// Integer percentage of games won by player `idx` (0 or 1).
    pub fn percentage(&self, idx: usize) -> u32 {
        if self.games == 0 {
            0
        } else {
            100 * self.wins[idx] / self.games
        }
    }
}

impl fmt::Display for MatchTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "After {} games:", self.games)?;
        writeln!(f, "Draws: {}", self.draws)?;
        for idx in 0..2 {
            writeln!(
                f,
                "{} wins: {} [{}%]",
                self.names[idx],
                self.wins[idx],
                self.percentage(idx)
            )?;
        }
        Ok(())
    }
}

/// Plays `games` games, swapping colors every other game so that `first`
/// has X in even-numbered games and `second` in odd-numbered ones.
pub fn play_many_games(
    first: &mut dyn Player,
    second: &mut dyn Player,
    games: u32,
) -> Result<MatchTally> {
    let mut tally = MatchTally {
        names: [first.name().to_string(), second.name().to_string()],
        wins: [0; 2],
        draws: 0,
        games,
    };

    for game in 0..games {
        let swapped = game % 2 == 1;
        let record = if swapped {
            play_game(second, first)?
        } else {
            play_game(first, second)?
        };

        match (record.winner, swapped) {
            (None, _) => tally.draws += 1,
            (Some(Color::Black), false) | (Some(Color::White), true) => tally.wins[0] += 1,
            (Some(_), _) => tally.wins[1] += 1,
        }
    }

    info!(
        games,
        draws = tally.draws,
        first = %tally.names[0],
        first_wins = tally.wins[0],
        second = %tally.names[1],
        second_wins = tally.wins[1],
        "match finished"
    );

    Ok(tally)
}
