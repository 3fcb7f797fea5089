//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, bounded size and hit/miss
//! statistics.

mod clock;
mod entry;
mod key;
mod service;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use key::{generate_key, PARAMS_SEPARATOR};
pub use service::CacheService;
pub use stats::{hit_rate_percent, CacheStats, Counters};
pub use store::{CacheStore, SetOptions};
