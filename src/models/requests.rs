//! Request DTOs for the service API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query for the single-entry cache endpoints (`/cache/entry?key=...`)
///
/// # Fields
/// - `key`: The cache key to inspect or remove
#[derive(Debug, Clone, Deserialize)]
pub struct EntryQuery {
    /// The cache key
    pub key: String,
}

impl EntryQuery {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.trim().is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}
