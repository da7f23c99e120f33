#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};
use web_time::{Duration, Instant};

use super::Player;
use super::weights::static_eval;
use crate::field::Field;
use crate::position::Position;
use crate::status::Status;

/// Score of a won game; larger than any positional evaluation.
pub const WIN: i32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchResult {
    Complete(i32),
    TimedOut,
}

impl SearchResult {
    fn negate(self) -> Self {
        match self {
            Self::Complete(score) => Self::Complete(-score),
            Self::TimedOut => Self::TimedOut,
        }
    }

    fn score(self) -> Option<i32> {
        match self {
            Self::Complete(score) => Some(score),
            Self::TimedOut => None,
        }
    }
}

/// Deadline checked at every node entry; `None` never expires.
#[derive(Debug, Clone, Copy)]
struct Budget {
    deadline: Option<Instant>,
}

impl Budget {
    const UNLIMITED: Self = Self { deadline: None };

    fn exhausted(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Fixed-depth negamax without pruning or move ordering.
///
/// Every legal continuation is explored to the configured depth. Children of
/// the root are searched with `depth - 1`, saturating at zero, so depths 0
/// and 1 both mean a one-ply lookahead scored by the static evaluator.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
    depth: u8,
    timeout: Option<Duration>,
    timed_out: bool,
    completed_depth: Option<u8>,
}

impl MinimaxPlayer {
    pub fn new(id: &str, depth: u8) -> Self {
        Self {
            name: format!("MinimaxPlayer_{id}"),
            depth,
            timeout: None,
            timed_out: false,
            completed_depth: None,
        }
    }

    /// Deepens iteratively from depth 0 and returns the choice of the deepest
    /// iteration that finished before `timeout`. The depth-0 pass always runs.
    pub fn with_timeout(id: &str, depth: u8, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::new(id, depth)
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Depth of the last search iteration that ran to completion.
    pub fn completed_depth(&self) -> Option<u8> {
        self.completed_depth
    }

    fn search(&mut self, position: &Position, moves: &[Field]) -> Option<Field> {
        self.timed_out = false;
        self.completed_depth = None;

        let children = children(position, moves);
        if children.len() < moves.len() {
            warn!(player = %self.name, "ignoring moves that are not legal in this position");
        }
        if children.is_empty() {
            return None;
        }

        let Some(timeout) = self.timeout else {
            let best = choose(&children, self.depth, &Budget::UNLIMITED);
            self.completed_depth = Some(self.depth);
            return best.map(|(mv, _)| mv);
        };

        let budget = Budget {
            deadline: Some(Instant::now() + timeout),
        };
        let mut best = choose(&children, 0, &Budget::UNLIMITED);
        self.completed_depth = Some(0);

        for depth in 1..=self.depth {
            match choose(&children, depth, &budget) {
                Some(choice) => {
                    best = Some(choice);
                    self.completed_depth = Some(depth);
                }
                None => {
                    self.timed_out = true;
                    warn!(player = %self.name, depth, "search deadline reached");
                    break;
                }
            }
        }

        best.map(|(mv, _)| mv)
    }
}

impl Player for MinimaxPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn best_move(&mut self, position: &Position, moves: &[Field]) -> Option<Field> {
        let best = self.search(position, moves);
        debug!(player = %self.name, best = ?best.map(|mv| mv.to_string()), "move chosen");
        best
    }
}

/// Negamax value of `position` searched to `depth`, from the point of view
/// of the side to move.
pub fn negamax_score(position: &Position, depth: u8) -> i32 {
    negamax(position, depth, &Budget::UNLIMITED)
        .score()
        .unwrap_or_else(|| unreachable!("an unlimited budget never times out"))
}

fn children(position: &Position, moves: &[Field]) -> Vec<(Field, Position)> {
    moves
        .iter()
        .filter_map(|&mv| position.apply_move(mv).ok().map(|next| (mv, next)))
        .collect()
}

/// Scores every root child at `depth - 1` and returns the first move with
/// the largest negated value, or `None` when the budget ran out.
fn choose(children: &[(Field, Position)], depth: u8, budget: &Budget) -> Option<(Field, i32)> {
    let child_depth = depth.saturating_sub(1);

    #[cfg(feature = "parallel")]
    let scores: Option<Vec<i32>> = children
        .par_iter()
        .map(|(_, next)| negamax(next, child_depth, budget).negate().score())
        .collect();
    #[cfg(not(feature = "parallel"))]
    let scores: Option<Vec<i32>> = children
        .iter()
        .map(|(_, next)| negamax(next, child_depth, budget).negate().score())
        .collect();

    let mut best: Option<(Field, i32)> = None;
    for (&(mv, _), score) in children.iter().zip(scores?) {
        debug!(%mv, score, depth, "root move evaluated");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    best
}

fn negamax(position: &Position, depth: u8, budget: &Budget) -> SearchResult {
    if budget.exhausted() {
        return SearchResult::TimedOut;
    }

    match position.generate_status() {
        Status::Finished { winner, .. } => SearchResult::Complete(match winner {
            None => 0,
            Some(color) if color == position.to_move() => WIN,
            Some(_) => -WIN,
        }),
        _ if depth == 0 => SearchResult::Complete(static_eval(position)),
        Status::OneSidedPass { .. } => {
            let passed = Position::new(*position.board(), position.to_move().opposite());
            negamax(&passed, depth - 1, budget).negate()
        }
        Status::MovesAvailable { moves } => {
            let mut best = i32::MIN;
            for (_, next) in children(position, &moves) {
                match negamax(&next, depth - 1, budget) {
                    SearchResult::TimedOut => return SearchResult::TimedOut,
                    SearchResult::Complete(score) => best = best.max(-score),
                }
            }
            SearchResult::Complete(best)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Color;

    fn field(token: &str) -> Field {
        token.parse().unwrap()
    }

    /// Initial center plus X on C1 and O on B1, so A1 captures into the corner.
    fn corner_available() -> Position {
        let mut text: Vec<char> = Position::initial().to_ascii().chars().collect();
        text[1] = 'O';
        text[2] = 'X';
        Position::from_ascii(&text.into_iter().collect::<String>(), Color::Black).unwrap()
    }

    #[test]
    fn single_legal_move_is_returned() {
        let mut text = String::from(".X");
        text.push_str(&"O".repeat(62));
        let pos = Position::from_ascii(&text, Color::White).unwrap();
        let mut player = MinimaxPlayer::new("1", 4);

        assert_eq!(player.best_move(&pos, &pos.legal_moves()), Some(field("A1")));
    }

    #[test]
    fn symmetric_openings_tie_break_to_first_move() {
        let pos = Position::initial();
        let moves = pos.legal_moves();

        for depth in 0..=3 {
            let mut player = MinimaxPlayer::new("1", depth);
            assert_eq!(player.best_move(&pos, &moves), Some(field("D3")));
        }
    }

    #[test]
    fn depth_zero_matches_one_ply_lookahead() {
        let pos = corner_available();
        let moves = pos.legal_moves();

        let mut shallow = MinimaxPlayer::new("0", 0);
        let mut one = MinimaxPlayer::new("1", 1);

        assert_eq!(shallow.best_move(&pos, &moves), Some(field("A1")));
        assert_eq!(one.best_move(&pos, &moves), Some(field("A1")));
        assert_eq!(shallow.completed_depth(), Some(0));
    }

    #[test]
    fn finished_positions_score_win_loss_and_draw() {
        let mut text = String::from(".");
        text.push_str(&"X".repeat(63));
        let x_to_move = Position::from_ascii(&text, Color::Black).unwrap();
        let o_to_move = Position::from_ascii(&text, Color::White).unwrap();
        let draw = Position::from_ascii(
            &format!("{}{}", "X".repeat(32), "O".repeat(32)),
            Color::Black,
        )
        .unwrap();

        assert_eq!(negamax_score(&x_to_move, 3), WIN);
        assert_eq!(negamax_score(&o_to_move, 0), -WIN);
        assert_eq!(negamax_score(&draw, 5), 0);
    }

    #[test]
    fn forced_pass_recurses_on_the_passed_position() {
        let mut text = String::from(".X");
        text.push_str(&"O".repeat(62));
        let pos = Position::from_ascii(&text, Color::Black).unwrap();
        let passed = Position::from_ascii(&text, Color::White).unwrap();

        assert!(pos.generate_status().is_pass_forced());
        assert_eq!(negamax_score(&pos, 2), -negamax_score(&passed, 1));
        // O fills A1 and wins 64-0.
        assert_eq!(negamax_score(&pos, 2), -WIN);
    }

    #[test]
    fn static_leaf_uses_side_to_move_perspective() {
        let pos = corner_available();

        assert_eq!(negamax_score(&pos, 0), static_eval(&pos));
        assert_eq!(static_eval(&pos), 10 + 20);
    }

    #[test]
    fn expired_deadline_still_returns_depth_zero_choice() {
        let pos = Position::initial();
        let moves = pos.legal_moves();
        let mut player = MinimaxPlayer::with_timeout("t", 6, Duration::ZERO);

        let mv = player.best_move(&pos, &moves).unwrap();

        assert!(moves.contains(&mv));
        assert!(player.timed_out());
        assert_eq!(player.completed_depth(), Some(0));
    }

    #[test]
    fn generous_deadline_reaches_full_depth() {
        let pos = corner_available();
        let moves = pos.legal_moves();
        let mut timed = MinimaxPlayer::with_timeout("t", 2, Duration::from_secs(60));
        let mut fixed = MinimaxPlayer::new("f", 2);

        assert_eq!(timed.best_move(&pos, &moves), fixed.best_move(&pos, &moves));
        assert!(!timed.timed_out());
        assert_eq!(timed.completed_depth(), Some(2));
    }

    #[test]
    fn illegal_supplied_moves_are_skipped() {
        let pos = Position::initial();
        let mut player = MinimaxPlayer::new("1", 1);

        assert_eq!(player.best_move(&pos, &[field("A1")]), None);
        assert_eq!(
            player.best_move(&pos, &[field("A1"), field("E6")]),
            Some(field("E6"))
        );
    }
}
