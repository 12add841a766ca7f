//! Cache Entry Module
//!
//! Defines a single cached response payload and its age tracking.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// One cached response body together with the instant it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw payload, opaque to the cache
    pub value: Vec<u8>,
    /// Insertion instant (monotonic clock)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `max_age`.
    ///
    /// The comparison is strict: an entry whose age equals `max_age` exactly
    /// is still fresh.
    pub fn is_expired(&self, max_age: Duration) -> bool {
        self.age() > max_age
    }
}
