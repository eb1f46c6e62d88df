//! In-memory stand-ins for DOM capabilities, shared by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::dom::{ClassList, EventSource, GrowTarget, Handler, Subscription};
use crate::error::PageError;

type Listener = (u64, &'static str, Handler);

struct ElementInner {
    height: RefCell<String>,
    content_height: Cell<i32>,
    empty: Cell<bool>,
    height_writes: RefCell<Vec<String>>,
    listeners: RefCell<Vec<Listener>>,
    cancelled: RefCell<Vec<u64>>,
    next_listener: Cell<u64>,
}

/// Element with browser-like scroll height: the rendered box never reports
/// less than its current inline height, so a stale height sticks unless it
/// is reset before measuring.
#[derive(Clone)]
pub struct FakeElement {
    inner: Rc<ElementInner>,
}

impl FakeElement {
    pub fn new(content_height: i32) -> Self {
        Self {
            inner: Rc::new(ElementInner {
                height: RefCell::new(String::new()),
                content_height: Cell::new(content_height),
                empty: Cell::new(false),
                height_writes: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
                cancelled: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    /// Simulate the user editing so the content needs `px` pixels.
    pub fn set_content_height(&self, px: i32) {
        self.inner.content_height.set(px);
    }

    pub fn height(&self) -> String {
        self.inner.height.borrow().clone()
    }

    pub fn height_writes(&self) -> Vec<String> {
        self.inner.height_writes.borrow().clone()
    }

    pub fn is_marked_empty(&self) -> bool {
        self.inner.empty.get()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Dispatch `event` to every listener registered for it.
    ///
    /// Handlers may add or cancel listeners, including their own; listeners
    /// cancelled during dispatch are dropped once it finishes.
    pub fn fire(&self, event: &str) {
        let mut taken = std::mem::take(&mut *self.inner.listeners.borrow_mut());
        for (_, name, handler) in &mut taken {
            if *name == event {
                handler();
            }
        }
        let cancelled = std::mem::take(&mut *self.inner.cancelled.borrow_mut());
        taken.retain(|(id, _, _)| !cancelled.contains(id));
        let mut listeners = self.inner.listeners.borrow_mut();
        taken.append(&mut listeners);
        *listeners = taken;
    }

    fn inline_height_px(&self) -> i32 {
        let height = self.inner.height.borrow();
        match height.strip_suffix("px").map(str::parse::<i32>) {
            Some(Ok(px)) => px,
            _ => 0,
        }
    }
}

impl GrowTarget for FakeElement {
    fn set_height(&self, value: &str) {
        value.clone_into(&mut self.inner.height.borrow_mut());
        self.inner.height_writes.borrow_mut().push(value.to_owned());
    }

    fn scroll_height(&self) -> i32 {
        self.inner.content_height.get().max(self.inline_height_px())
    }

    fn mark_empty(&self) {
        self.inner.empty.set(true);
    }
}

impl EventSource for FakeElement {
    fn add_listener(&self, event: &'static str, handler: Handler) -> Result<Subscription, PageError> {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, event, handler));

        let weak: Weak<ElementInner> = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(listener, _, _)| *listener != id);
                inner.cancelled.borrow_mut().push(id);
            }
        }))
    }
}

/// Token list with `DOMTokenList` add/replace semantics.
#[derive(Clone, Default)]
pub struct FakeClassList {
    tokens: Rc<RefCell<Vec<String>>>,
}

impl FakeClassList {
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.borrow().clone()
    }
}

impl ClassList for FakeClassList {
    fn contains(&self, class: &str) -> bool {
        self.tokens.borrow().iter().any(|t| t == class)
    }

    fn add(&self, class: &str) -> Result<(), PageError> {
        if !self.contains(class) {
            self.tokens.borrow_mut().push(class.to_owned());
        }
        Ok(())
    }

    fn remove(&self, class: &str) -> Result<(), PageError> {
        self.tokens.borrow_mut().retain(|t| t != class);
        Ok(())
    }

    fn replace(&self, from: &str, to: &str) -> Result<bool, PageError> {
        let mut tokens = self.tokens.borrow_mut();
        let Some(pos) = tokens.iter().position(|t| t == from) else {
            return Ok(false);
        };
        if tokens.iter().any(|t| t == to) {
            tokens.remove(pos);
        } else {
            to.clone_into(&mut tokens[pos]);
        }
        Ok(true)
    }
}
