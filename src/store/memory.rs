//! In-process store, for tests and hosts that persist flags themselves.

use super::{SeenStore, StoreError};
use std::collections::HashMap;

/// Flags held in a `HashMap` for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    flags: HashMap<String, bool>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `keys` already marked as seen.
    #[must_use]
    pub fn with_seen<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            flags: keys.into_iter().map(|k| (k.to_string(), true)).collect(),
        }
    }

    /// Whether an entry exists for `key`, regardless of its value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.flags.contains_key(key)
    }
}

impl SeenStore for MemoryStore {
    fn get(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.flags.get(key).copied().unwrap_or(false))
    }

    fn set(&mut self, key: &str, seen: bool) -> Result<(), StoreError> {
        self.flags.insert(key.to_string(), seen);
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), StoreError> {
        self.flags.remove(key);
        Ok(())
    }
}
