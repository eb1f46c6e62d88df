//! Page wiring configuration.
//!
//! Defaults match the notes app templates. Hosts with different markup can
//! pass a JSON object to `mount_with_config`; omitted fields keep their
//! defaults.

use serde::Deserialize;

use crate::consts::{STORAGE_KEY, TEXT_INPUT_SELECTOR, TOGGLE_ID};
use crate::error::PageError;
use crate::theme::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Storage key for the theme preference.
    pub storage_key: String,
    /// Element id of the theme toggle control.
    pub toggle_id: String,
    /// Selector for the auto-growing text input.
    pub text_input_selector: String,
    /// Theme written on a first visit.
    pub default_theme: Theme,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            toggle_id: TOGGLE_ID.to_owned(),
            text_input_selector: TEXT_INPUT_SELECTOR.to_owned(),
            default_theme: Theme::Dark,
        }
    }
}

impl PageConfig {
    /// Parse a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] for malformed JSON, unknown fields, or
    /// an unknown theme name.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }
}
