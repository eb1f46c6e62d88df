//! Browser host: binds the page behaviors to the live DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that needs `web_sys` lives here. The wrappers below implement
//! the capability traits from [`crate::dom`] and [`crate::store`]; [`boot`]
//! feeds them to [`crate::page::assemble`], and the resulting page is parked
//! in a thread-local so its listeners live as long as the document.
//!
//! ERROR HANDLING
//! ==============
//! A failed setup step stops the steps after it, but the partial page is
//! installed anyway: a blocked `localStorage` or a missing toggle control
//! leaves the text input growing.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DomTokenList, Element, HtmlElement, Storage, Window};

use crate::config::PageConfig;
use crate::consts::{CONFIG_ELEMENT_ID, READY_EVENT};
use crate::dom::{ClassList, EventSource, GrowTarget, Handler, Subscription};
use crate::error::PageError;
use crate::page::{self, Page};
use crate::store::ThemeStore;

thread_local! {
    static PAGE: RefCell<Option<BrowserPage>> = const { RefCell::new(None) };
}

// =============================================================================
// DOM WRAPPERS
// =============================================================================

/// DOM element as a grow target and event source.
#[derive(Clone)]
pub struct BrowserElement(pub Element);

impl GrowTarget for BrowserElement {
    fn set_height(&self, value: &str) {
        let Some(html) = self.0.dyn_ref::<HtmlElement>() else {
            log::warn!("autogrow: <{}> has no inline style", self.0.tag_name());
            return;
        };
        if let Err(err) = html.style().set_property("height", value) {
            log::warn!("autogrow: height write rejected: {err:?}");
        }
    }

    fn scroll_height(&self) -> i32 {
        self.0.scroll_height()
    }

    fn mark_empty(&self) {
        match js_sys::Reflect::set(&self.0, &JsValue::from_str("empty"), &JsValue::TRUE) {
            Ok(true) => {}
            Ok(false) => log::warn!("autogrow: element refused the empty flag"),
            Err(err) => log::warn!("autogrow: setting empty flag failed: {err:?}"),
        }
    }
}

impl EventSource for BrowserElement {
    fn add_listener(&self, event: &'static str, handler: Handler) -> Result<Subscription, PageError> {
        let closure = Closure::<dyn FnMut()>::wrap(handler);
        self.0
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;

        let target = self.0.clone();
        Ok(Subscription::new(move || {
            if let Err(err) = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
                log::warn!("failed to remove {event} listener: {err:?}");
            }
        }))
    }
}

/// `window.localStorage`.
pub struct BrowserStorage(pub Storage);

impl ThemeStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        self.0.get_item(key).map_err(PageError::from)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.0.set_item(key, value).map_err(PageError::from)
    }
}

/// `document.body.classList`.
pub struct BodyClasses(pub DomTokenList);

impl ClassList for BodyClasses {
    fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    fn add(&self, class: &str) -> Result<(), PageError> {
        self.0.add_1(class).map_err(PageError::from)
    }

    fn remove(&self, class: &str) -> Result<(), PageError> {
        self.0.remove_1(class).map_err(PageError::from)
    }

    fn replace(&self, from: &str, to: &str) -> Result<bool, PageError> {
        self.0.replace(from, to).map_err(PageError::from)
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// Page wired to the live document.
pub type BrowserPage = Page<BrowserStorage, BodyClasses>;

fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

fn theme_host(document: &Document) -> Result<(BrowserStorage, BodyClasses), PageError> {
    let storage = window()?.local_storage()?.ok_or(PageError::NoStorage)?;
    let body = document.body().ok_or(PageError::NoBody)?;
    Ok((BrowserStorage(storage), BodyClasses(body.class_list())))
}

/// Attach autogrow, initialize the theme, and bind the toggle control on
/// the current document.
///
/// The page comes back even when a step fails; it holds whatever was
/// attached before the failure, which is returned alongside.
pub fn boot(config: &PageConfig) -> (BrowserPage, Result<(), PageError>) {
    let document = match document() {
        Ok(document) => document,
        Err(err) => return (Page::empty(), Err(err)),
    };
    let text_input = match document.query_selector(&config.text_input_selector) {
        Ok(element) => element.map(BrowserElement),
        Err(err) => return (Page::empty(), Err(err.into())),
    };

    page::assemble(
        config,
        text_input,
        || theme_host(&document),
        |id| document.get_element_by_id(id).map(BrowserElement),
    )
}

/// Config embedded in the page as
/// `<script type="application/json" id="notes-ui-config">`, or the defaults.
fn embedded_config() -> PageConfig {
    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            log::debug!("no document for embedded config: {err}");
            return PageConfig::default();
        }
    };
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID} ({}): {err}", err.error_code());
            PageConfig::default()
        }
    }
}

/// Tear down the installed page, boot a new one, and keep it alive.
///
/// The old page goes first: its theme classes must be gone before the new
/// toggle applies its own.
fn run(config: Option<PageConfig>) {
    let previous = PAGE.with(|slot| slot.borrow_mut().take());
    if let Some(previous) = previous {
        log::debug!("replacing previously mounted page");
        if let Err(err) = previous.teardown() {
            log::warn!("previous page teardown incomplete ({}): {err}", err.error_code());
        }
    }

    let config = config.unwrap_or_else(embedded_config);
    let (page, outcome) = boot(&config);
    if let Err(err) = outcome {
        log::error!("page setup stopped ({}): {err}", err.error_code());
    }
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// Run the page behaviors once the document is parsed.
///
/// With `None`, the config is read from the page when setup runs.
///
/// # Errors
///
/// Returns an error when there is no document or the ready listener cannot
/// be registered.
pub fn mount(config: Option<PageConfig>) -> Result<(), PageError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        run(config);
        return Ok(());
    }

    let callback = Closure::once_into_js(move || run(config));
    document.add_event_listener_with_callback(READY_EVENT, callback.unchecked_ref())?;
    Ok(())
}

// =============================================================================
// WASM EXPORTS
// =============================================================================

/// Module entry point: install logging and mount with the page's config.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("logger already installed: {err}");
    }
    if let Err(err) = mount(None) {
        log::error!("mount failed ({}): {err}", err.error_code());
    }
}

/// Remount with a JSON config. The current page is torn down first, so its
/// body class never lingers next to the new one.
///
/// # Errors
///
/// Returns a `"E_CODE: message"` string for invalid config or a missing
/// document.
#[wasm_bindgen]
pub fn mount_with_config(config: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(config)?;
    mount(Some(config))?;
    Ok(())
}
