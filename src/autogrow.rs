//! Auto-growing text input.
//!
//! Keeps a textarea's inline height equal to its content height so it never
//! shows an inner scrollbar. The height is reset to `auto` before measuring;
//! measuring a box that still carries its old explicit height would report
//! at least that height and the box could never shrink.

use crate::consts::{AUTO_HEIGHT, INPUT_EVENT};
use crate::dom::{EventSource, GrowTarget, Subscription};
use crate::error::PageError;

#[cfg(test)]
#[path = "autogrow_test.rs"]
mod autogrow_test;

/// Fit `element`'s height to its content.
pub fn recalculate<T: GrowTarget + ?Sized>(element: &T) {
    element.set_height(AUTO_HEIGHT);
    let content = element.scroll_height();
    element.set_height(&format!("{content}px"));
}

/// Live autogrow binding. Dropping it removes the input listener.
#[derive(Debug)]
pub struct Autogrow {
    input: Subscription,
}

impl Autogrow {
    /// Stop resizing; the last applied height stays in place.
    pub fn detach(self) {
        self.input.cancel();
    }
}

/// Start autogrow on `element`, if the page has one.
///
/// Marks the element empty, listens for `input`, and sizes it once right
/// away. Returns `Ok(None)` without touching anything when `element` is
/// `None`.
///
/// # Errors
///
/// Returns the listener registration error from the element.
pub fn attach<T>(element: Option<T>) -> Result<Option<Autogrow>, PageError>
where
    T: GrowTarget + EventSource + Clone + 'static,
{
    let Some(element) = element else {
        log::debug!("autogrow: no text input on page");
        return Ok(None);
    };

    element.mark_empty();
    let target = element.clone();
    let input = element.add_listener(INPUT_EVENT, Box::new(move || recalculate(&target)))?;
    recalculate(&element);

    Ok(Some(Autogrow { input }))
}
