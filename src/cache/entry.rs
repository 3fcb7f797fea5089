//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
    /// Insertion sequence, breaks ties between equal creation timestamps
    pub(crate) seq: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now_ms` living for `ttl_ms`.
    pub fn new(value: T, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            value,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_ms),
            seq: 0,
        }
    }

    pub(crate) fn with_seq(mut self, seq: u64) -> Self {
        self.seq = seq;
        self
    }

    // == Is Expired ==
    /// Checks if the entry has expired as seen by a read.
    ///
    /// Strict: an entry read exactly at its expiry timestamp is still live.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at
    }

    // == Is Due For Cleanup ==
    /// Checks if the proactive sweep should drop this entry.
    ///
    /// Inclusive: the sweep also removes entries expiring exactly now.
    pub fn is_due_at(&self, now_ms: u64) -> bool {
        self.expires_at <= now_ms
    }

    /// Ordering key used to pick the eviction victim.
    pub(crate) fn age_key(&self) -> (u64, u64) {
        (self.created_at, self.seq)
    }
}
