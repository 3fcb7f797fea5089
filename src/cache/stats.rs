//! Cache Statistics Module
//!
//! Tracks hit/miss counters and renders the public stats snapshot.

use serde::Serialize;

// == Counters ==
/// Running hit/miss counters owned by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub hits: u64,
    pub misses: u64,
}

impl Counters {
    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Reset ==
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// == Cache Stats ==
/// Point-in-time view of cache performance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Number of gets that returned a live value
    pub hits: u64,
    /// Number of gets that found nothing or an expired entry
    pub misses: u64,
    /// Current number of entries in the cache
    pub size: usize,
    /// Hit percentage, rounded to two decimals
    pub hit_rate: f64,
}

impl CacheStats {
    // == Constructor ==
    /// Builds a snapshot from raw counters and the current entry count.
    pub fn new(counters: Counters, size: usize) -> Self {
        Self {
            hits: counters.hits,
            misses: counters.misses,
            size,
            hit_rate: hit_rate_percent(counters.hits, counters.misses),
        }
    }
}

// == Hit Rate ==
/// Returns `hits / (hits + misses) * 100` rounded to 2 decimals, or 0.0 if
/// no requests have been made.
pub fn hit_rate_percent(hits: u64, misses: u64) -> f64 {
    let total = hits + misses;
    if total == 0 {
        return 0.0;
    }
    let rate = hits as f64 / total as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}
