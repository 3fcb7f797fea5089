//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheService;

// == Cleanup Task ==
/// Handle to a running expiry sweep.
///
/// Dropping the handle leaves the sweep running; call [`CleanupTask::stop`]
/// to end it.
#[derive(Debug)]
pub struct CleanupTask {
    handle: JoinHandle<()>,
}

impl CleanupTask {
    /// Cancels the sweep.
    pub fn stop(&self) {
        self.handle.abort();
        info!("TTL cleanup task stopped");
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task loops forever, sleeping for `interval` between sweeps. Each sweep
/// takes the store's write lock only for the duration of the scan.
///
/// # Example
/// ```ignore
/// let cache = CacheService::new(CacheStore::new(100, Duration::from_secs(300)));
/// let sweeper = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweeper.stop();
/// ```
pub fn spawn_cleanup_task<T>(cache: CacheService<T>, interval: Duration) -> CleanupTask
where
    T: Clone + Send + Sync + 'static,
{
    let handle = tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {}ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup().await;

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    });

    CleanupTask { handle }
}
