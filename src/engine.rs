//! Binding to the game object the page constructs.

use js_sys::{Uint32Array, JSON};
use lib_2048::{Direction, Engine, Error, GameState, Grid, MoveError, MoveUpdate};
use wasm_bindgen::prelude::*;

use crate::describe;

const ILLEGAL_MOVE: &str = "Illegal move";

#[wasm_bindgen]
extern "C" {
    /// Any object with `swipe`, `cellsSnapshot`, `score`, `state` and
    /// `reset` methods.
    pub type Game;

    #[wasm_bindgen(method, catch)]
    fn swipe(this: &Game, direction: u8) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = cellsSnapshot)]
    fn cells_snapshot(this: &Game) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    fn score(this: &Game) -> u32;

    #[wasm_bindgen(method)]
    fn state(this: &Game) -> JsValue;

    #[wasm_bindgen(method)]
    fn reset(this: &Game);
}

/// Direction codes as the engine numbers them.
const fn wire_code(direction: Direction) -> u8 {
    direction as u8
}

fn is_illegal_move(err: &JsValue) -> bool {
    describe(err).trim() == ILLEGAL_MOVE
}

fn parse_update(value: &JsValue) -> Result<MoveUpdate, MoveError> {
    if value.is_undefined() || value.is_null() {
        return Ok(MoveUpdate::default());
    }

    let json: String = JSON::stringify(value)
        .map_err(|err| MoveError::Unexpected(describe(&err)))?
        .into();

    serde_json::from_str(&json).map_err(|err| MoveError::Unexpected(err.to_string()))
}

pub struct JsEngine {
    game: Game,
}

impl JsEngine {
    pub fn new(game: Game) -> Self {
        Self { game }
    }
}

impl Engine for JsEngine {
    fn swipe(&mut self, direction: Direction) -> Result<MoveUpdate, MoveError> {
        match self.game.swipe(wire_code(direction)) {
            Ok(value) => parse_update(&value),
            Err(err) if is_illegal_move(&err) => Err(MoveError::Illegal),
            Err(err) => Err(MoveError::Unexpected(describe(&err))),
        }
    }

    fn cells(&self) -> lib_2048::Result<Grid> {
        let value = self
            .game
            .cells_snapshot()
            .map_err(|err| Error::Snapshot(describe(&err)))?;

        let cells = Uint32Array::new(&value).to_vec();

        Grid::from_slice(&cells)
            .ok_or_else(|| Error::Snapshot(format!("expected 16 cells, got {}", cells.len())))
    }

    fn score(&self) -> u32 {
        self.game.score()
    }

    fn state(&self) -> GameState {
        let state = self.game.state();

        let over = state.as_f64() == Some(1.0)
            || state
                .as_string()
                .is_some_and(|name| name.eq_ignore_ascii_case("over"));

        if over {
            GameState::Over
        } else {
            GameState::Ongoing
        }
    }

    fn reset(&mut self) {
        self.game.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_are_distinct() {
        let mut codes: Vec<_> = Direction::iter().map(wire_code).collect();
        codes.sort_unstable();

        assert_eq!(codes, vec![0, 1, 2, 3]);
        assert_eq!(wire_code(Direction::Left), 0);
        assert_eq!(wire_code(Direction::Down), 3);
    }
}
