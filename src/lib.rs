//! Page behaviors for the notes web app, compiled to WebAssembly.
//!
//! Two behaviors attach once the document is parsed: the note textarea grows
//! to fit its content, and a toggle control flips between the dark and light
//! themes, remembering the choice in `localStorage`. The decision logic is
//! plain Rust over small capability traits; only [`browser`] touches the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`autogrow`] | Fit a text input's height to its content |
//! | [`theme`] | Theme preference, pure toggle logic, and [`theme::ThemeToggle`] |
//! | [`page`] | Boot order and partial-failure handling, host-agnostic |
//! | [`dom`] | Capability traits and listener [`dom::Subscription`]s |
//! | [`store`] | Theme storage trait and in-memory store |
//! | [`config`] | Page wiring configuration |
//! | [`browser`] | `web-sys` adapters, mounting, and wasm exports |
//! | [`error`] | [`error::PageError`] |
//! | [`consts`] | Storage key, element ids, class and event names |

pub mod autogrow;
pub mod browser;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod page;
pub mod store;
pub mod theme;

#[cfg(test)]
mod fake;
