use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the game into its host. The game rules themselves
/// never fail.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("browser call failed: {0}")]
    Dom(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("game already running")]
    AlreadyRunning,
    #[cfg(feature = "serde_json")]
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
