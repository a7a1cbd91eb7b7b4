//! Errors raised by the browser-facing half of the engine.

use wasm_bindgen::JsValue;

/// Failure while binding to or drawing on the canvas element.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The canvas element did not hand out a 2D rendering context.
    #[error("2d rendering context is unavailable")]
    ContextUnavailable,
    /// A canvas or DOM call threw.
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
