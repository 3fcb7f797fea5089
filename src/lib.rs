//! User Cache - user directory service with an in-process response cache
//!
//! Reads from the upstream user API go through a TTL cache with bounded
//! size, hit/miss statistics and a periodic expiry sweep.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheService, CacheStore, SetOptions};
pub use config::Config;
pub use interceptor::{CacheInterceptor, HttpEvent, RequestDescriptor};
pub use tasks::{spawn_cleanup_task, CleanupTask};
