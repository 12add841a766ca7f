//! Cache Store Module
//!
//! Plain key/value storage for cached payloads. Synchronization lives one
//! level up, in [`ExpiringCache`](crate::cache::ExpiringCache).

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Map from request URL to cached payload.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores a payload under `key`.
    ///
    /// An existing entry for the same key is replaced, including its
    /// creation instant.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// Age is not checked here: an entry stays readable until a sweep
    /// removes it.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(|entry| entry.value.as_slice())
    }

    // == Reap ==
    /// Removes every entry older than `max_age`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, max_age: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(max_age));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
