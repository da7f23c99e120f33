//! JavaScript-facing functions. Positions travel as the 64-character board
//! encoding plus an `X`/`O` side-to-move token; moves as `A1`..`H8` or `pass`.

use wasm_bindgen::prelude::*;

use crate::config::PlayerSpec;
use crate::field::Field;
use crate::perft::perft_table;
use crate::position::Position;
use crate::square::Color;
use crate::types::{PerftRow, PositionView};

pub const PASS: &str = "pass";

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Status of the position: `{ state, moves }` or `{ state, differential, winner }`.
#[wasm_bindgen]
pub fn status(pos: &str, to_move: &str) -> Result<JsValue, JsError> {
    let position = parse(pos, to_move)?;
    Ok(serde_wasm_bindgen::to_value(&position.generate_status())?)
}

/// Legal moves of the side to move, as field tokens.
#[wasm_bindgen]
pub fn candidates(pos: &str, to_move: &str) -> Result<JsValue, JsError> {
    let position = parse(pos, to_move)?;
    Ok(serde_wasm_bindgen::to_value(&position.legal_moves())?)
}

/// Plays `mv` (a field token or `pass`) and returns the resulting position.
#[wasm_bindgen]
pub fn make_move(pos: &str, to_move: &str, mv: &str) -> Result<JsValue, JsError> {
    let view = play(parse(pos, to_move)?, mv)?;
    Ok(serde_wasm_bindgen::to_value(&view)?)
}

/// Move chosen by the configured player, or `pass` when none is available.
/// `spec` is an optional `PlayerSpec` object; the default is minimax depth 3.
#[wasm_bindgen]
pub fn bot_move(pos: &str, to_move: &str, spec: JsValue) -> Result<String, JsError> {
    let position = parse(pos, to_move)?;
    let spec: PlayerSpec = if spec.is_undefined() || spec.is_null() {
        PlayerSpec::default()
    } else {
        serde_wasm_bindgen::from_value(spec)?
    };
    Ok(choose(&position, &spec))
}

/// Node counts from the initial position for depths `0..max_depth`.
#[wasm_bindgen]
pub fn perft(max_depth: u32) -> Result<JsValue, JsError> {
    let rows: Vec<PerftRow> = perft_table(max_depth)
        .into_iter()
        .map(|(depth, nodes)| PerftRow { depth, nodes })
        .collect();
    Ok(serde_wasm_bindgen::to_value(&rows)?)
}

fn parse(pos: &str, to_move: &str) -> crate::Result<Position> {
    Position::from_ascii(pos, Color::from_token(to_move)?)
}

fn play(mut position: Position, mv: &str) -> crate::Result<PositionView> {
    let flipped = if mv == PASS {
        position.make_pass()?;
        Vec::new()
    } else {
        position.make_move(mv.parse::<Field>()?)?
    };
    Ok(PositionView::new(&position, flipped))
}

fn choose(position: &Position, spec: &PlayerSpec) -> String {
    let moves = position.legal_moves();
    spec.build("bot")
        .best_move(position, &moves)
        .map_or_else(|| PASS.to_string(), |mv| mv.to_string())
}
