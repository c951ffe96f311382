//! Browser binding
//!
//! JS owns the canvas, the key listeners and `requestAnimationFrame`; this
//! wrapper holds the single current `MatchState` and swaps it on every call.

use wasm_bindgen::prelude::*;

use crate::config::MatchConfig;
use crate::sim::{MatchState, Side, update};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Rally Pong wasm module loaded");
}

#[wasm_bindgen]
pub struct WebMatch {
    state: MatchState,
}

#[wasm_bindgen]
impl WebMatch {
    /// Start a match; `config_json` may be empty for the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(now_ms: f64, seed: u64, config_json: &str) -> Result<WebMatch, JsValue> {
        let config = if config_json.trim().is_empty() {
            MatchConfig::default()
        } else {
            MatchConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        Ok(WebMatch {
            state: MatchState::new(config, now_ms, seed),
        })
    }

    /// Advance to the animation-frame timestamp
    pub fn update(&mut self, now_ms: f64) {
        self.state = update(&self.state, now_ms);
    }

    pub fn set_paddle_speed(&mut self, left: bool, speed: f32) {
        let side = if left { Side::Left } else { Side::Right };
        self.state = self.state.set_paddle_speed(side, speed);
    }

    pub fn toggle_pause(&mut self) {
        self.state = self.state.toggle_pause();
    }

    /// Configured paddle speed, for the host's key handlers
    pub fn paddle_speed(&self) -> f32 {
        self.state.config.paddle_speed
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_default()
    }
}
