//! JavaScript bindings. Every action returns `{ success, data?, error? }`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::MatchConfig;
use crate::conversion;
use crate::error::{ErrorPayload, GameError};
use crate::game::GameInstance;
use crate::heroes::{self, HeroKind};
use crate::scoring;
use crate::types::{PieceKind, Player, Position};

#[derive(Serialize)]
struct ActionResult<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorPayload>,
}

fn respond<T: Serialize>(result: Result<T, GameError>) -> Result<JsValue, JsValue> {
    let envelope = match result {
        Ok(data) => ActionResult {
            success: true,
            data: Some(data),
            error: None,
        },
        Err(err) => ActionResult {
            success: false,
            data: None,
            error: Some(err.to_payload()),
        },
    };
    Ok(serde_wasm_bindgen::to_value(&envelope)?)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

fn parse_kind(name: &str) -> Result<PieceKind, JsValue> {
    name.parse::<PieceKind>().map_err(|err| JsValue::from_str(&err))
}

fn player(white: bool) -> Player {
    if white { Player::White } else { Player::Black }
}

#[wasm_bindgen]
pub struct WasmGame {
    game: GameInstance,
}

#[wasm_bindgen]
impl WasmGame {
    /// `hero_json` is the stored selection, e.g. `{"white":"alexander","black":null}`.
    #[wasm_bindgen(constructor)]
    pub fn new(hero_json: Option<String>) -> Result<WasmGame, JsValue> {
        let config = match hero_json.as_deref() {
            Some(json) => MatchConfig::from_json(json)
                .map_err(|err| JsValue::from_str(&format!("Invalid hero selection: {err}")))?,
            None => MatchConfig::default(),
        };
        Ok(Self {
            game: GameInstance::new_with_default_effects(config),
        })
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(self.game.state())
    }

    pub fn heroes(&self) -> Result<JsValue, JsValue> {
        to_js(self.game.heroes())
    }

    pub fn live_trophies(&self) -> Result<JsValue, JsValue> {
        to_js(&self.game.live_trophies())
    }

    pub fn possible_moves(&self, x: i32, y: i32) -> Result<JsValue, JsValue> {
        to_js(&self.game.get_possible_moves(Position::new(x, y)))
    }

    pub fn possible_attacks(&self, x: i32, y: i32) -> Result<JsValue, JsValue> {
        to_js(&self.game.get_possible_attacks(Position::new(x, y)))
    }

    pub fn select_piece(&mut self, x: i32, y: i32) -> Result<JsValue, JsValue> {
        respond(
            self.game
                .select_piece(Position::new(x, y))
                .map(|moves| moves.to_vec()),
        )
    }

    pub fn clear_selection(&mut self) {
        self.game.clear_selection();
    }

    pub fn move_piece(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> Result<JsValue, JsValue> {
        respond(
            self.game
                .move_piece(Position::new(from_x, from_y), Position::new(to_x, to_y)),
        )
    }

    pub fn convert_piece(&mut self, x: i32, y: i32, target: &str) -> Result<JsValue, JsValue> {
        let target = parse_kind(target)?;
        respond(self.game.convert_piece(Position::new(x, y), target))
    }

    pub fn activate_ability(&mut self, id: &str, x: Option<i32>, y: Option<i32>) -> Result<JsValue, JsValue> {
        let target = x.zip(y).map(|(x, y)| Position::new(x, y));
        respond(self.game.activate_ability(id, target))
    }

    pub fn award_pin(&mut self, white: bool) -> bool {
        self.game.award_pin(player(white))
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }
}

/// Fresh copies of all hero definitions for the selection screen.
#[wasm_bindgen]
pub fn hero_catalog() -> Result<JsValue, JsValue> {
    let heroes: Vec<_> = HeroKind::ALL.into_iter().map(heroes::Hero::new).collect();
    to_js(&heroes)
}

#[wasm_bindgen]
pub fn scoring_info(kind: &str) -> Result<String, JsValue> {
    Ok(scoring::scoring_info(parse_kind(kind)?))
}

#[wasm_bindgen]
pub fn conversion_description(from: &str, to: &str) -> Result<Option<String>, JsValue> {
    let (from, to) = (parse_kind(from)?, parse_kind(to)?);
    Ok(conversion::conversion_description(from, to).map(str::to_string))
}
