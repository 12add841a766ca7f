//! Expiring Cache Module
//!
//! Thread-safe response cache whose entries are purged by a background reaper.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::tasks::spawn_reap_task;

/// Smallest interval accepted by [`ExpiringCache::new`].
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

// == Expiring Cache ==
/// In-memory cache of raw response bodies keyed by request URL.
///
/// Freshness is enforced only by the reaper: [`get`](Self::get) returns
/// whatever is stored, so a reader can observe a payload up to roughly
/// twice the interval old. Every read, write and sweep goes through the
/// same mutex.
///
/// The reaper stops when [`shutdown`](Self::shutdown) is called or when the
/// cache is dropped.
#[derive(Debug)]
pub struct ExpiringCache {
    /// Shared storage, also held by the reaper
    store: Arc<Mutex<CacheStore>>,
    /// Sweep period and maximum entry age
    interval: Duration,
    /// Stops the reaper when sent to or dropped
    shutdown_tx: mpsc::Sender<()>,
    /// Reaper task handle
    reaper: JoinHandle<()>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current tokio
    /// runtime.
    ///
    /// A zero interval is raised to [`MIN_INTERVAL`].
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let interval = if interval < MIN_INTERVAL {
            warn!(
                "Cache interval {:?} is below the minimum, using {:?}",
                interval, MIN_INTERVAL
            );
            MIN_INTERVAL
        } else {
            interval
        };

        let store = Arc::new(Mutex::new(CacheStore::new()));
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let reaper = spawn_reap_task(store.clone(), interval, shutdown_rx);

        Self {
            store,
            interval,
            shutdown_tx,
            reaper,
        }
    }

    // == Add ==
    /// Inserts or replaces the payload for `key`, stamping it with the
    /// current instant.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let key = key.into();
        debug!(key = %key, bytes = value.len(), "Caching response");
        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Entries older than the interval are still returned until the next
    /// sweep removes them.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key).map(<[u8]>::to_vec)
    }

    // == Interval ==
    /// Sweep period, which is also the maximum age before an entry is
    /// eligible for removal.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Number of entries currently stored, stale or not.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored, stale or not.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    pub async fn shutdown(self) {
        let Self {
            shutdown_tx,
            reaper,
            ..
        } = self;

        // A send error means the reaper is already gone
        let _ = shutdown_tx.send(()).await;
        drop(shutdown_tx);

        if let Err(e) = reaper.await {
            warn!("Cache reaper ended abnormally: {}", e);
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_get() {
        let cache = ExpiringCache::new(Duration::from_secs(60));

        cache.add("https://example.com/a", b"hello".to_vec()).await;

        assert_eq!(
            cache.get("https://example.com/a").await,
            Some(b"hello".to_vec())
        );
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = ExpiringCache::new(Duration::from_secs(60));

        assert!(cache.get("missing").await.is_none());
        assert!(cache.is_empty().await);
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_add_replaces_existing_value() {
        let cache = ExpiringCache::new(Duration::from_secs(60));

        cache.add("key", b"v1".to_vec()).await;
        cache.add("key", b"v2".to_vec()).await;

        assert_eq!(cache.get("key").await, Some(b"v2".to_vec()));
        assert_eq!(cache.len().await, 1);
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_zero_interval_is_clamped() {
        let cache = ExpiringCache::new(Duration::ZERO);
        assert_eq!(cache.interval(), MIN_INTERVAL);
        cache.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_entry_served_until_swept() {
        let cache = ExpiringCache::new(Duration::from_secs(10));

        // Added just after the first sweep is scheduled at t=10s
        tokio::time::sleep(Duration::from_secs(1)).await;
        cache.add("key", b"value".to_vec()).await;

        // t=19s: older than the interval, but the t=10s sweep saw it at 9s
        tokio::time::sleep(Duration::from_secs(18)).await;
        assert_eq!(cache.get("key").await, Some(b"value".to_vec()));
        assert!(!cache.is_empty().await);

        // t=21s: the t=20s sweep removed it
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(cache.get("key").await.is_none());
        assert!(cache.is_empty().await);

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_reaper() {
        let cache = ExpiringCache::new(Duration::from_secs(3600));

        tokio::time::timeout(Duration::from_secs(1), cache.shutdown())
            .await
            .expect("Shutdown should not wait for the next sweep");
    }
}
