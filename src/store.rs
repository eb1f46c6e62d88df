//! Key-value storage for the theme preference.
//!
//! The browser implementation wraps `localStorage`; [`MemoryStore`] keeps
//! values in a map for tests and hosts without web storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::PageError;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// String key-value storage with `localStorage` semantics.
pub trait ThemeStore {
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PageError>;

    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write
    /// (quota exceeded, storage disabled).
    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry, e.g. a preference from a prior visit.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<T: ThemeStore + ?Sized> ThemeStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        (**self).set(key, value)
    }
}
