//! Key-value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page persists exactly one value (the theme). `LocalStore` is the
//! browser's `localStorage`; `MemoryStore` backs host tests and any
//! environment where storage is unavailable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::PageError;

pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), PageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `localStorage`, looked up on every call.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, PageError> {
        let window = web_sys::window().ok_or(PageError::StorageUnavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(PageError::StorageUnavailable),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        let storage = match Self::storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("reading {key}: {err}");
                return None;
            }
        };
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("reading {key}: {}", PageError::from(err));
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PageError> {
        Self::storage()?.set_item(key, value)?;
        Ok(())
    }
}
