//! Shared names for the page contract: storage key, element ids, events.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const STORAGE_KEY: &str = "theme";

// ── Page structure ──────────────────────────────────────────────

/// Element id of the theme toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Selector for the auto-growing text input. Only the first match is used.
pub const TEXT_INPUT_SELECTOR: &str = "textarea";

/// Id of the optional `<script type="application/json">` holding the page
/// config read at startup.
pub const CONFIG_ELEMENT_ID: &str = "notes-ui-config";

/// Body class (and stored value) for the dark theme.
pub const DARK_CLASS: &str = "dark-mode";

/// Body class (and stored value) for the light theme.
pub const LIGHT_CLASS: &str = "light-mode";

// ── Events ──────────────────────────────────────────────────────

pub const INPUT_EVENT: &str = "input";
pub const CLICK_EVENT: &str = "click";
pub const READY_EVENT: &str = "DOMContentLoaded";

/// Height written before measuring so shrinking content is re-measured.
pub const AUTO_HEIGHT: &str = "auto";
