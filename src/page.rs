//! Page assembly: wire autogrow and the theme toggle in boot order.
//!
//! DESIGN
//! ======
//! Setup runs in three steps (autogrow, theme initialization, toggle
//! binding) and stops at the first failure. Whatever was attached before
//! the failure is kept in the returned [`Page`], so a page without usable
//! storage or without a toggle control still has a growing text input.
//! The browser host supplies the DOM lookups; tests supply fakes.

use crate::autogrow::{self, Autogrow};
use crate::config::PageConfig;
use crate::dom::{ClassList, EventSource, GrowTarget};
use crate::error::PageError;
use crate::store::ThemeStore;
use crate::theme::ThemeToggle;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Behaviors attached to one document.
pub struct Page<S, B> {
    pub autogrow: Option<Autogrow>,
    pub theme: Option<ThemeToggle<S, B>>,
}

impl<S, B> Page<S, B>
where
    S: ThemeStore + 'static,
    B: ClassList + 'static,
{
    #[must_use]
    pub fn empty() -> Self {
        Self { autogrow: None, theme: None }
    }

    /// Detach every listener and strip the theme classes.
    ///
    /// # Errors
    ///
    /// Returns an error if a theme class cannot be removed.
    pub fn teardown(self) -> Result<(), PageError> {
        if let Some(autogrow) = self.autogrow {
            autogrow.detach();
        }
        match self.theme {
            Some(theme) => theme.teardown(),
            None => Ok(()),
        }
    }
}

/// Run the boot steps and return the page together with the first failure.
///
/// `theme_host` yields storage and body class list; `toggle_control` looks
/// the control up by id. Both run only if the steps before them succeed.
pub fn assemble<T, E, S, B>(
    config: &PageConfig,
    text_input: Option<T>,
    theme_host: impl FnOnce() -> Result<(S, B), PageError>,
    toggle_control: impl FnOnce(&str) -> Option<E>,
) -> (Page<S, B>, Result<(), PageError>)
where
    T: GrowTarget + EventSource + Clone + 'static,
    E: EventSource,
    S: ThemeStore + 'static,
    B: ClassList + 'static,
{
    let mut page = Page::empty();
    let outcome = assemble_into(&mut page, config, text_input, theme_host, toggle_control);
    (page, outcome)
}

fn assemble_into<T, E, S, B>(
    page: &mut Page<S, B>,
    config: &PageConfig,
    text_input: Option<T>,
    theme_host: impl FnOnce() -> Result<(S, B), PageError>,
    toggle_control: impl FnOnce(&str) -> Option<E>,
) -> Result<(), PageError>
where
    T: GrowTarget + EventSource + Clone + 'static,
    E: EventSource,
    S: ThemeStore + 'static,
    B: ClassList + 'static,
{
    page.autogrow = autogrow::attach(text_input)?;

    let (store, body) = theme_host()?;
    let theme = page.theme.insert(ThemeToggle::initialize(store, body, config)?);

    let control = toggle_control(&config.toggle_id);
    theme.bind(control.as_ref(), &config.toggle_id)
}
