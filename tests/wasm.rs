//! Boundary tests, run with `wasm-pack test --node`.
#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use othello::api;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const INITIAL: &str = "...........................OX......XO...........................";

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn candidates_lists_opening_moves() {
    let moves = Array::from(&api::candidates(INITIAL, "X").unwrap());

    let tokens: Vec<String> = moves.iter().map(|m| m.as_string().unwrap()).collect();
    assert_eq!(tokens, ["D3", "C4", "F5", "E6"]);
}

#[wasm_bindgen_test]
fn status_reports_state_tag() {
    let status = api::status(INITIAL, "X").unwrap();

    assert_eq!(get(&status, "state").as_string().unwrap(), "moves_available");
}

#[wasm_bindgen_test]
fn make_move_returns_next_position() {
    let view = api::make_move(INITIAL, "X", "D3").unwrap();

    assert_eq!(get(&view, "to_move").as_string().unwrap(), "O");
    assert_eq!(Array::from(&get(&view, "flipped")).length(), 1);
}

#[wasm_bindgen_test]
fn invalid_inputs_are_errors() {
    assert!(api::status("...", "X").is_err());
    assert!(api::status(INITIAL, "Z").is_err());
    assert!(api::make_move(INITIAL, "X", "A1").is_err());
}

#[wasm_bindgen_test]
fn bot_move_accepts_player_spec() {
    let spec = js_sys::Object::new();
    Reflect::set(&spec, &"kind".into(), &"square_valuation".into()).unwrap();

    assert_eq!(api::bot_move(INITIAL, "X", spec.into()).unwrap(), "D3");
    assert_eq!(api::bot_move(INITIAL, "X", JsValue::UNDEFINED).unwrap(), "D3");
}

#[wasm_bindgen_test]
fn perft_table_has_reference_counts() {
    let rows = Array::from(&api::perft(4).unwrap());

    let nodes: Vec<f64> = rows
        .iter()
        .map(|row| get(&row, "nodes").as_f64().unwrap())
        .collect();
    assert_eq!(nodes, [1.0, 4.0, 12.0, 56.0]);
}
