//! Capability traits for the few DOM operations the page behaviors need.
//!
//! DESIGN
//! ======
//! Autogrow and the theme toggle never call browser APIs directly. They talk
//! to these traits, implemented over real DOM objects in [`crate::browser`]
//! and over in-memory stand-ins in tests.

use crate::error::PageError;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Element whose height tracks its content.
pub trait GrowTarget {
    /// Write the inline `height` style.
    fn set_height(&self, value: &str);

    /// Full scrollable content height in CSS pixels.
    fn scroll_height(&self) -> i32;

    /// Flag the element as holding no user content yet.
    fn mark_empty(&self);
}

/// Event handler invoked with no arguments; the event object is not needed.
pub type Handler = Box<dyn FnMut()>;

/// Something that dispatches named DOM events.
pub trait EventSource {
    /// Register `handler` for `event`. The listener stays registered until
    /// the returned [`Subscription`] is cancelled or dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying target rejects the listener.
    fn add_listener(&self, event: &'static str, handler: Handler) -> Result<Subscription, PageError>;
}

/// Owning handle for a registered listener.
#[must_use = "dropping a Subscription removes its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the closure that unregisters the listener.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Remove the listener now.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}

/// Token list of an element's `class` attribute.
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;

    /// Add `class` if not already present.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying token list rejects the token.
    fn add(&self, class: &str) -> Result<(), PageError>;

    /// Remove `class` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying token list rejects the token.
    fn remove(&self, class: &str) -> Result<(), PageError>;

    /// Replace `from` with `to`. Does nothing and returns `false` when
    /// `from` is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying token list rejects the token.
    fn replace(&self, from: &str, to: &str) -> Result<bool, PageError>;
}
