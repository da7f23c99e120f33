use othello::ai::negamax_score;
use othello::{MinimaxPlayer, Player, Position, RandomPlayer};

/// Positions a few random plies into a game.
fn sample_positions() -> Vec<Position> {
    let mut out = Vec::new();
    for seed in 0..6 {
        let mut player = RandomPlayer::with_seed("walk", seed);
        let mut pos = Position::initial();
        for _ in 0..(8 + seed as usize * 3) {
            let moves = pos.legal_moves();
            let Some(mv) = player.best_move(&pos, &moves) else {
                break;
            };
            pos = pos.apply_move(mv).unwrap();
        }
        if !pos.legal_moves().is_empty() {
            out.push(pos);
        }
    }
    out
}

#[test]
fn depth_zero_returns_a_supplied_move() {
    for pos in sample_positions() {
        let moves = pos.legal_moves();
        let mut player = MinimaxPlayer::new("0", 0);

        let mv = player.best_move(&pos, &moves).unwrap();

        assert!(moves.contains(&mv));
    }
}

#[test]
fn chosen_move_has_maximal_negated_subtree_value() {
    for depth in 1..=3u8 {
        for pos in sample_positions() {
            let moves = pos.legal_moves();
            let mut player = MinimaxPlayer::new("m", depth);

            let chosen = player.best_move(&pos, &moves).unwrap();
            let value = |mv| -negamax_score(&pos.apply_move(mv).unwrap(), depth - 1);
            let chosen_value = value(chosen);

            for &mv in &moves {
                assert!(value(mv) <= chosen_value, "{mv} beats {chosen} at depth {depth}");
            }
            let first_best = moves.iter().copied().find(|&mv| value(mv) == chosen_value);
            assert_eq!(first_best, Some(chosen), "ties go to the first listed move");
        }
    }
}

#[test]
fn search_does_not_mutate_the_position() {
    let pos = Position::initial();
    let snapshot = pos;
    let mut player = MinimaxPlayer::new("m", 3);

    player.best_move(&pos, &pos.legal_moves());

    assert_eq!(pos, snapshot);
}
