//! Browser surface
//!
//! The page's script owns the canvas, the keyboard/slider listeners and the
//! `requestAnimationFrame` loop. It calls `advance` once per frame and draws
//! from `snapshot_json`.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;
use crate::sim::MoveIntent;

fn to_js(err: crate::GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Brick Sweep starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    /// Start a game from an optional JSON configuration
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebGame, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json_str(&json).map_err(to_js)?,
            None => GameConfig::default(),
        };
        let game = Game::new(config).map_err(to_js)?;
        Ok(WebGame { game })
    }

    pub fn advance(&mut self) {
        self.game.advance();
    }

    /// `"LEFT"`, `"RIGHT"` or `"NONE"`
    pub fn set_move_intent(&mut self, intent: &str) -> Result<(), JsValue> {
        let intent: MoveIntent = intent.parse().map_err(to_js)?;
        self.game.set_move_intent(intent);
        Ok(())
    }

    pub fn set_ball_speed(&mut self, speed: f32) -> Result<(), JsValue> {
        self.game.set_ball_speed(speed).map_err(to_js)
    }

    pub fn restart(&mut self) {
        self.game.restart();
    }

    pub fn score(&self) -> f64 {
        self.game.score() as f64
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.game.snapshot().to_json().map_err(to_js)
    }
}
