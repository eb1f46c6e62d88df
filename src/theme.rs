//! Dark/light theme preference and toggle.
//!
//! The preference lives in storage under one key and is mirrored as a class
//! on `<body>`. The free functions [`initialize`] and [`toggle`] are the
//! whole decision logic: they map the observed state to the next theme plus
//! a list of [`ThemeEffect`]s. [`ThemeToggle`] carries those effects out
//! against injected storage and class-list capabilities and owns the click
//! listener on the toggle control.
//!
//! TRADE-OFFS
//! ==========
//! `toggle` decides from the body class, not from storage, so a page whose
//! storage was edited elsewhere still flips what the user actually sees.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::PageConfig;
use crate::consts::{CLICK_EVENT, DARK_CLASS, LIGHT_CLASS};
use crate::dom::{ClassList, EventSource, Subscription};
use crate::error::PageError;
use crate::store::ThemeStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme. The serialized form doubles as the stored value and the
/// body class name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "dark-mode")]
    Dark,
    #[serde(rename = "light-mode")]
    Light,
}

impl Theme {
    /// Body class, also the value written to storage.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Dark => DARK_CLASS,
            Self::Light => LIGHT_CLASS,
        }
    }

    /// Parse a stored value. Anything but the two class names is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            DARK_CLASS => Some(Self::Dark),
            LIGHT_CLASS => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Side effect requested by the theme logic, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEffect {
    /// Write the theme to storage.
    Persist(Theme),
    /// Add the theme's class to the body.
    AddClass(Theme),
    /// Replace one theme class with the other, only if `from` is present.
    SwapClass { from: Theme, to: Theme },
}

/// Decide the initial theme from the stored value.
///
/// A missing or unrecognized value falls back to `fallback`, which is
/// persisted immediately. A valid stored value is applied and left as is.
#[must_use]
pub fn initialize(stored: Option<&str>, fallback: Theme) -> (Theme, Vec<ThemeEffect>) {
    match stored.and_then(Theme::parse) {
        Some(theme) => (theme, vec![ThemeEffect::AddClass(theme)]),
        None => (fallback, vec![ThemeEffect::Persist(fallback), ThemeEffect::AddClass(fallback)]),
    }
}

/// Flip the theme on a click, given whether the body shows the dark class.
#[must_use]
pub fn toggle(body_is_dark: bool) -> (Theme, Vec<ThemeEffect>) {
    let from = if body_is_dark { Theme::Dark } else { Theme::Light };
    let to = from.flipped();
    (to, vec![ThemeEffect::SwapClass { from, to }, ThemeEffect::Persist(to)])
}

struct ThemeState<S, B> {
    store: S,
    body: B,
    key: String,
}

impl<S: ThemeStore, B: ClassList> ThemeState<S, B> {
    fn apply(&self, effects: &[ThemeEffect]) -> Result<(), PageError> {
        for effect in effects {
            match *effect {
                ThemeEffect::Persist(theme) => self.store.set(&self.key, theme.class_name())?,
                ThemeEffect::AddClass(theme) => self.body.add(theme.class_name())?,
                ThemeEffect::SwapClass { from, to } => {
                    if !self.body.replace(from.class_name(), to.class_name())? {
                        log::debug!("theme: body lacks {}, class left unchanged", from.class_name());
                    }
                }
            }
        }
        Ok(())
    }

    fn toggle(&self) -> Result<Theme, PageError> {
        let (next, effects) = toggle(self.body.contains(DARK_CLASS));
        self.apply(&effects)?;
        log::info!("theme: switched to {}", next.class_name());
        Ok(next)
    }
}

/// Theme preference bound to a storage backend and the body class list.
pub struct ThemeToggle<S, B> {
    state: Rc<ThemeState<S, B>>,
    click: Option<Subscription>,
}

impl<S, B> ThemeToggle<S, B>
where
    S: ThemeStore + 'static,
    B: ClassList + 'static,
{
    /// Read the stored preference, default it if needed, and apply it to
    /// the body.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or written, or the body
    /// class cannot be set.
    pub fn initialize(store: S, body: B, config: &PageConfig) -> Result<Self, PageError> {
        let stored = store.get(&config.storage_key)?;
        if let Some(value) = stored.as_deref() {
            if Theme::parse(value).is_none() {
                log::warn!("theme: ignoring unrecognized stored value {value:?}");
            }
        }

        let (theme, effects) = initialize(stored.as_deref(), config.default_theme);
        let state = ThemeState { store, body, key: config.storage_key.clone() };
        state.apply(&effects)?;
        log::info!("theme: applied {}", theme.class_name());

        Ok(Self { state: Rc::new(state), click: None })
    }

    /// Attach the click handler to the toggle control.
    ///
    /// Rebinding replaces the previous listener.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingToggle`] when `control` is `None`, or the
    /// listener registration error.
    pub fn bind<E: EventSource>(&mut self, control: Option<&E>, control_id: &str) -> Result<(), PageError> {
        let Some(control) = control else {
            return Err(PageError::MissingToggle(control_id.to_owned()));
        };

        let state = Rc::clone(&self.state);
        let subscription = control.add_listener(
            CLICK_EVENT,
            Box::new(move || {
                if let Err(err) = state.toggle() {
                    log::warn!("theme: toggle failed ({}): {err}", err.error_code());
                }
            }),
        )?;
        self.click = Some(subscription);
        Ok(())
    }

    /// Remove the click handler, if bound.
    pub fn unbind(&mut self) {
        if let Some(subscription) = self.click.take() {
            subscription.cancel();
        }
    }

    /// Unbind and strip both theme classes from the body, leaving storage
    /// alone. Run this before initializing another toggle on the same body
    /// so the two never leave conflicting classes behind.
    ///
    /// # Errors
    ///
    /// Returns an error if a class cannot be removed.
    pub fn teardown(mut self) -> Result<(), PageError> {
        self.unbind();
        for theme in [Theme::Dark, Theme::Light] {
            self.state.body.remove(theme.class_name())?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.click.is_some()
    }

    /// Flip the theme as a click would.
    ///
    /// # Errors
    ///
    /// Returns an error if the class swap or the storage write fails.
    pub fn toggle(&self) -> Result<Theme, PageError> {
        self.state.toggle()
    }

    /// Theme currently shown on the body.
    #[must_use]
    pub fn current(&self) -> Theme {
        if self.state.body.contains(DARK_CLASS) { Theme::Dark } else { Theme::Light }
    }
}
