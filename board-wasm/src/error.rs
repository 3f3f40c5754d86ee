use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures in the browser glue. The board model itself never fails.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{id} is not a {expected}")]
    WrongElement {
        id: &'static str,
        expected: &'static str,
    },
    #[error("2D context not available")]
    NoContext,
    #[error("board has not been started")]
    NotStarted,
    #[error("ignoring {key}={value:?}: {reason}")]
    InvalidParam {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("failed to serialize board state: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(v: JsValue) -> Self {
        HostError::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}

impl From<HostError> for JsValue {
    fn from(e: HostError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
