//! Move-generator node counts (compare with http://www.aartbik.com/strategy.php).

use crate::position::Position;

/// Number of positions reachable in exactly `depth` moves.
///
/// Passes are not expanded: a position without legal moves contributes
/// nothing below it.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    position
        .legal_moves()
        .into_iter()
        .filter_map(|mv| position.apply_move(mv).ok())
        .map(|next| perft(&next, depth - 1))
        .sum()
}

/// `(depth, nodes)` from the initial position for every depth below `max_depth`.
pub fn perft_table(max_depth: u32) -> Vec<(u32, u64)> {
    let initial = Position::initial();
    (0..max_depth)
        .map(|depth| (depth, perft(&initial, depth)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_matches_reference_counts() {
        let table = perft_table(6);

        assert_eq!(
            table,
            vec![(0, 1), (1, 4), (2, 12), (3, 56), (4, 244), (5, 1396)]
        );
    }

    #[test]
    fn finished_position_has_no_children() {
        let pos = Position::from_ascii(&"O".repeat(64), crate::square::Color::Black).unwrap();

        assert_eq!(perft(&pos, 0), 1);
        assert_eq!(perft(&pos, 3), 0);
    }
}
