//! Page boot and DOM errors.
//!
//! ERROR HANDLING
//! ==============
//! Boot surfaces failures through `Result` so the wasm entry point can log
//! them once. Event handlers never return errors to the browser; they log
//! and keep the page usable.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no window in this environment")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("local storage unavailable")]
    NoStorage,
    #[error("toggle control not found: #{0}")]
    MissingToggle(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl PageError {
    /// Stable code for log lines and the JS-facing error string.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoWindow => "E_NO_WINDOW",
            Self::NoDocument => "E_NO_DOCUMENT",
            Self::NoBody => "E_NO_BODY",
            Self::NoStorage => "E_NO_STORAGE",
            Self::MissingToggle(_) => "E_MISSING_TOGGLE",
            Self::Config(_) => "E_CONFIG",
            Self::Dom(_) => "E_DOM",
        }
    }
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => Self::Dom(message),
            None => Self::Dom(format!("{value:?}")),
        }
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&format!("{}: {err}", err.error_code()))
    }
}
