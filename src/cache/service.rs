//! Cache Service Module
//!
//! Shared, lock-guarded handle to a [`CacheStore`] used by every consumer.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::cache::{generate_key, CacheStats, CacheStore, SetOptions};
use crate::tasks::{spawn_cleanup_task, CleanupTask};

// == Cache Service ==
/// Cloneable facade over a single cache store.
///
/// Clones share the same store.
#[derive(Debug)]
pub struct CacheService<T> {
    store: Arc<RwLock<CacheStore<T>>>,
}

impl<T> Clone for CacheService<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> CacheService<T> {
    /// Wraps an existing store.
    pub fn new(store: CacheStore<T>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn get(&self, key: &str) -> Option<T> {
        self.store.write().await.get(key)
    }

    pub async fn set(&self, key: impl Into<String>, value: T, options: SetOptions) {
        self.store.write().await.set(key, value, options);
    }

    pub async fn has(&self, key: &str) -> bool {
        self.store.write().await.has(key)
    }

    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Runs one expiry sweep immediately, returning the number removed.
    pub async fn cleanup(&self) -> usize {
        self.store.write().await.cleanup()
    }

    /// See [`generate_key`].
    pub fn generate_key(base: &str, params: Option<&Map<String, Value>>) -> String {
        generate_key(base, params)
    }

    /// Starts the periodic expiry sweep. Stop it with [`CleanupTask::stop`].
    pub fn start_cleanup(&self, interval: Duration) -> CleanupTask {
        spawn_cleanup_task(self.clone(), interval)
    }
}
