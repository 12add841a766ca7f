//! Cache Module
//!
//! Provides the in-memory response cache whose entries expire through a
//! periodic background sweep.

mod entry;
mod expiring;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::{ExpiringCache, MIN_INTERVAL};
pub use store::CacheStore;
