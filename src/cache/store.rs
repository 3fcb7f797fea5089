//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with TTL expiration and
//! oldest-first eviction.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, Counters, SystemClock};

// == Set Options ==
/// Per-call options for [`CacheStore::set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Overrides the store's default TTL for this entry
    pub ttl: Option<Duration>,
}

impl SetOptions {
    /// Options carrying an explicit TTL.
    pub fn ttl(ttl: Duration) -> Self {
        Self { ttl: Some(ttl) }
    }
}

// == Cache Store ==
/// Bounded key-value storage with TTL support and hit/miss accounting.
#[derive(Debug)]
pub struct CacheStore<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Hit/miss counters, touched only by `get` and `clear`
    counters: Counters,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL for entries set without an explicit one
    default_ttl: Duration,
    /// Next insertion sequence number
    next_seq: u64,
    clock: Arc<dyn Clock>,
}

impl<T: Clone> CacheStore<T> {
    // == Constructor ==
    /// Creates a new CacheStore on the system clock.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold (at least 1)
    /// * `default_ttl` - TTL for entries set without an explicit one
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self::with_clock(max_entries, default_ttl, Arc::new(SystemClock))
    }

    /// Creates a new CacheStore reading time from `clock`.
    pub fn with_clock(max_entries: usize, default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            counters: Counters::default(),
            max_entries: max_entries.max(1),
            default_ttl,
            next_seq: 0,
            clock,
        }
    }

    // == Get ==
    /// Retrieves a live value by key.
    ///
    /// Counts a hit when a live value is returned and a miss otherwise. An
    /// expired entry found here is removed on the spot.
    pub fn get(&mut self, key: &str) -> Option<T> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                let value = entry.value.clone();
                self.counters.record_hit();
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.counters.record_miss();
                debug!(key, "cache entry expired on read");
                None
            }
            None => {
                self.counters.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value, replacing any previous entry under the same key.
    ///
    /// At capacity the entry created earliest is evicted first, even when
    /// `key` is already present.
    pub fn set(&mut self, key: impl Into<String>, value: T, options: SetOptions) {
        let key = key.into();
        let now = self.clock.now_ms();

        if self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }

        let ttl = options.ttl.unwrap_or(self.default_ttl);
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        let seq = self.next_seq;
        self.next_seq += 1;

        let entry = CacheEntry::new(value, now, ttl_ms).with_seq(seq);
        self.entries.insert(key, entry);
    }

    // == Has ==
    /// Reports whether a live entry exists, without touching the counters.
    pub fn has(&mut self, key: &str) -> bool {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if entry.is_expired_at(now) => {
                self.entries.remove(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    // == Delete ==
    /// Removes an entry by key, returning whether one was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Drops every entry and resets the hit/miss counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.counters.reset();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats::new(self.counters, self.entries.len())
    }

    // == Cleanup ==
    /// Removes every entry whose expiry is at or before now.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_due_at(now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.age_key())
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
            debug!(key = %key, "evicted oldest cache entry");
        }
    }
}
