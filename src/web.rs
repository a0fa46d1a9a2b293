//! Browser binding
//!
//! Exposes the controller to a JavaScript host that owns the canvas, the
//! `requestAnimationFrame` loop and the keyboard listener. The host draws
//! from `snapshot_json()` after every `tick()`.

use wasm_bindgen::prelude::*;

use crate::controller::{SessionController, TriggerOutcome};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        // Only fails when a logger is already installed (module instantiated twice)
        log::warn!("Console logger already set: {}", err);
    }
    log::info!("Dino Dash (wasm) loaded");
}

#[wasm_bindgen]
pub struct WebSession {
    controller: SessionController,
}

#[wasm_bindgen]
impl WebSession {
    /// Entropy-seeded session with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSession {
        WebSession {
            controller: SessionController::new(),
        }
    }

    /// Session with a JSON tuning override and fixed seed
    #[wasm_bindgen(js_name = withTuning)]
    pub fn with_tuning(json: &str, seed: u64) -> Result<WebSession, JsError> {
        let tuning = Tuning::from_json(json)?;
        let controller = SessionController::with_tuning(tuning, seed)?;
        Ok(WebSession { controller })
    }

    pub fn activate(&mut self) {
        self.controller.activate();
    }

    pub fn deactivate(&mut self) {
        self.controller.deactivate();
    }

    /// Returns true unless the trigger was ignored
    pub fn trigger(&mut self) -> bool {
        self.controller.trigger() != TriggerOutcome::Ignored
    }

    /// Returns true if the runner crashed this tick
    pub fn tick(&mut self) -> bool {
        self.controller.tick().crashed()
    }

    /// Current state as JSON, or `null` while deactivated
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        match self.controller.snapshot() {
            Some(snapshot) => Ok(snapshot.to_json()?),
            None => Ok("null".to_string()),
        }
    }
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}
