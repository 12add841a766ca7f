//! Expiry Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps expired entries out of `store`.
///
/// The task wakes every `interval` and removes each entry older than
/// `interval`, holding the store lock for the whole sweep. Because the
/// period equals the age limit, an entry can stay readable for up to
/// twice the interval before a sweep catches it.
///
/// The loop ends when a message arrives on `shutdown` or when every
/// sender for it has been dropped.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
/// let handle = spawn_reap_task(store.clone(), Duration::from_secs(300), shutdown_rx);
/// // Later:
/// shutdown_tx.send(()).await.ok();
/// handle.await.ok();
/// ```
pub fn spawn_reap_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown: mpsc::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting cache reaper with interval of {:?}", interval);

        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let (removed, remaining) = {
                        let mut guard = store.lock().await;
                        let removed = guard.reap(interval);
                        (removed, guard.len())
                    };

                    if removed > 0 {
                        info!("Cache sweep: removed {} expired entries, {} remaining", removed, remaining);
                    } else {
                        debug!("Cache sweep: no expired entries found");
                    }
                }
                _ = shutdown.recv() => {
                    break;
                }
            }
        }

        debug!("Cache reaper stopped");
    })
}
