use crate::board::Board;
use crate::field::{COLS, Field, ROWS};
use crate::square::{Color, Square};

const FRAME_COLS: usize = COLS + 2;
const FRAME_ROWS: usize = ROWS + 2;
const FRAME_CELLS: usize = FRAME_ROWS * FRAME_COLS;

/// Offsets of the eight compass directions in the framed grid.
const DIRECTIONS: [isize; 8] = [
    -(FRAME_COLS as isize) - 1,
    -(FRAME_COLS as isize),
    -(FRAME_COLS as isize) + 1,
    -1,
    1,
    FRAME_COLS as isize - 1,
    FRAME_COLS as isize,
    FRAME_COLS as isize + 1,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    OffBoard,
    Empty,
    Own,
    Opponent,
}

/// Capture scanner over a copy of the board framed by off-board sentinels,
/// so ray walks stop at the edge without bounds checks.
#[derive(Debug, Clone)]
pub struct MoveGenerator {
    cells: [Cell; FRAME_CELLS],
}

impl MoveGenerator {
    pub fn new(board: &Board, to_move: Color) -> Self {
        let own = to_move.to_square();
        let mut cells = [Cell::OffBoard; FRAME_CELLS];

        for field in Field::all() {
            cells[framed(field)] = match board.get(field) {
                Square::Empty => Cell::Empty,
                sq if sq == own => Cell::Own,
                _ => Cell::Opponent,
            };
        }

        Self { cells }
    }

    /// Legal destinations in row-major order.
    pub fn legal_moves(&self) -> Vec<Field> {
        Field::all()
            .filter(|&field| self.is_legal(field))
            .collect()
    }

    pub fn has_legal_move(&self) -> bool {
        Field::all().any(|field| self.is_legal(field))
    }

    pub fn is_legal(&self, field: Field) -> bool {
        let origin = framed(field);
        self.cells[origin] == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&step| self.capture_run(origin, step) > 0)
    }

    /// Opponent fields flipped by playing `field`; empty when nothing is captured.
    pub fn flips(&self, field: Field) -> Vec<Field> {
        let origin = framed(field);
        if self.cells[origin] != Cell::Empty {
            return Vec::new();
        }

        let mut out = Vec::new();
        for &step in &DIRECTIONS {
            let run = self.capture_run(origin, step);
            let mut idx = origin;
            for _ in 0..run {
                idx = idx.wrapping_add_signed(step);
                out.extend(unframed(idx));
            }
        }
        out
    }

    /// Length of the opponent run starting next to `origin` along `step`,
    /// or 0 when the run is not closed by one of the mover's stones.
    fn capture_run(&self, origin: usize, step: isize) -> usize {
        let mut idx = origin.wrapping_add_signed(step);
        let mut run = 0;

        while self.cells[idx] == Cell::Opponent {
            run += 1;
            idx = idx.wrapping_add_signed(step);
        }

        if self.cells[idx] == Cell::Own { run } else { 0 }
    }
}

fn framed(field: Field) -> usize {
    (field.row() + 1) * FRAME_COLS + field.col() + 1
}

fn unframed(idx: usize) -> Option<Field> {
    let row = (idx / FRAME_COLS).checked_sub(1)?;
    let col = (idx % FRAME_COLS).checked_sub(1)?;
    Field::from_row_col(row, col)
}
