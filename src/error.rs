//! Error types
//!
//! Navigation never fails; these cover the user actions that can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeckError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("invalid deck config: {0}")]
    Config(String),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("legacy copy command failed")]
    LegacyCopy,

    #[error("empty URL")]
    EmptyUrl,

    #[error("not an image: {mime:?}")]
    NotAnImage { mime: String },

    #[error("file could not be read: {0}")]
    FileRead(String),

    #[error("missing element: {0}")]
    MissingElement(String),
}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        DeckError::Config(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl DeckError {
    /// Describe a JS exception value for logging
    pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }
}
