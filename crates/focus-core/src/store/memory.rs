//! In-memory key-value store for tests and ephemeral use.

use std::cell::RefCell;
use std::collections::HashMap;

use super::KvStore;
use crate::error::StoreError;

/// HashMap-backed [`KvStore`]. Single-threaded, like the rest of the system.
#[derive(Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry directly, bypassing the trait. Test convenience.
    pub fn seed(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.into(), value.into());
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}
