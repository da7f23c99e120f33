use once_cell::sync::Lazy;

use crate::field::{COLS, FIELDS, Field, ROWS};
use crate::position::Position;

/// Upper-left quadrant of the positional table. The full table is
/// symmetric under horizontal and vertical reflection.
const QUADRANT: [[i32; 4]; 4] = [
    [100, -20, 10, 30],
    [-20, -50, 0, 0],
    [10, 0, 0, 0],
    [30, 0, 0, 0],
];

/// Static square weights, row-major from `A1`.
pub static WEIGHTS: Lazy<[i32; FIELDS]> = Lazy::new(|| {
    let mut table = [0; FIELDS];
    for field in Field::all() {
        let row = field.row().min(ROWS - 1 - field.row());
        let col = field.col().min(COLS - 1 - field.col());
        table[field.index()] = QUADRANT[row][col];
    }
    table
});

pub fn weight(field: Field) -> i32 {
    WEIGHTS[field.index()]
}

/// Sum of weights of the side to move's stones minus the opponent's.
pub fn static_eval(position: &Position) -> i32 {
    let own = position.to_move();
    Field::all()
        .filter_map(|field| {
            position
                .square_at(field)
                .color()
                .map(|color| if color == own { weight(field) } else { -weight(field) })
        })
        .sum()
}
