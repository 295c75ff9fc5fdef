use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod conversion;
pub mod error;
pub mod game;
pub mod heroes;
pub mod movement;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod types;
pub mod victory;
pub mod wasm;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
