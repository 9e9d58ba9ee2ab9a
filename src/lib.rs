//! MecaTRON-3000 core crate.
//!
//! Words fall down the play field and the player types them before they hit
//! the bottom. The rules (word bank, scoring, falling field, keystroke
//! matching) are plain Rust and run anywhere; `web` hosts them in the browser
//! with DOM rendering, `setInterval` timers and a `keypress` listener.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod falling;
pub mod game_loop;
pub mod input;
mod logging;
pub mod render;
pub mod rng;
pub mod score;
pub mod session;
pub mod spawner;
pub mod web;
pub mod word_bank;

pub use config::GameConfig;
pub use error::GameError;
pub use falling::{FallingWord, FallingWordField, WordId, WordState};
pub use game_loop::{Clock, GameLoop, KeySource};
pub use input::{Completion, MatchReport};
pub use render::{NullRenderer, Renderer};
pub use rng::{LcgRng, WordRng};
pub use score::ScoreModel;
pub use session::{GameSession, SessionStats};
pub use spawner::WordSpawner;
pub use word_bank::{Tier, WordBank};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Starts a game with the default pacing on the current page.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())?;
    Ok(())
}

/// Starts a game with settings from a JSON object, e.g.
/// `{"spawn_period_ms": 2000}`. Missing fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    web::start(GameConfig::from_json(json)?)?;
    Ok(())
}

#[wasm_bindgen]
pub fn stop_game() {
    web::stop();
}

#[wasm_bindgen]
pub fn current_score() -> u32 {
    web::with_session(|s| s.score()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn current_tier() -> u8 {
    web::with_session(|s| s.tier().value()).unwrap_or(0)
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
