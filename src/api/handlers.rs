//! API Handlers
//!
//! HTTP request handlers for the user and cache administration endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::cache::{CacheService, CacheStats, CacheStore};
use crate::client::UserClient;
use crate::config::Config;
use crate::error::{ApiError, FetchError, Result};
use crate::models::{
    CleanupResponse, ClearResponse, DeleteResponse, EntryQuery, EntryStatusResponse,
    HealthResponse, User,
};

/// Application state shared across all handlers.
///
/// The cache and the client hold clones of the same store.
#[derive(Clone)]
pub struct AppState {
    /// Response cache shared with the user client
    pub cache: CacheService<Value>,
    /// Upstream user API client
    pub users: UserClient,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: CacheService<Value>, users: UserClient) -> Self {
        Self { cache, users }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds one cache store and hands it to the client.
    pub fn from_config(config: &Config) -> std::result::Result<Self, FetchError> {
        let cache = CacheService::new(CacheStore::new(config.max_entries, config.default_ttl()));
        let users = UserClient::from_config(config, cache.clone())?;
        Ok(Self::new(cache, users))
    }
}

/// Handler for GET /users
pub async fn list_users_handler(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list_users().await)
}

/// Handler for GET /users/:id
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>> {
    state
        .users
        .get_user(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("user {}", id)))
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats().await)
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.clear().await;
    Json(ClearResponse::cleared())
}

/// Handler for POST /cache/cleanup
pub async fn cleanup_handler(State(state): State<AppState>) -> Json<CleanupResponse> {
    let removed = state.cache.cleanup().await;
    Json(CleanupResponse { removed })
}

/// Handler for GET /cache/entry?key=...
pub async fn entry_status_handler(
    State(state): State<AppState>,
    Query(query): Query<EntryQuery>,
) -> Result<Json<EntryStatusResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let present = state.cache.has(&query.key).await;
    Ok(Json(EntryStatusResponse::new(query.key, present)))
}

/// Handler for DELETE /cache/entry?key=...
pub async fn delete_entry_handler(
    State(state): State<AppState>,
    Query(query): Query<EntryQuery>,
) -> Result<Json<DeleteResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let removed = state.cache.delete(&query.key).await;
    Ok(Json(DeleteResponse::new(query.key, removed)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SetOptions;
    use serde_json::json;
    use std::time::Duration;

    fn test_state() -> AppState {
        let cache = CacheService::new(CacheStore::new(100, Duration::from_secs(300)));
        // Unreachable upstream; tests prime the cache instead
        let users =
            UserClient::new(reqwest::Client::new(), cache.clone(), "http://127.0.0.1:1", 0).unwrap();
        AppState::new(cache, users)
    }

    #[tokio::test]
    async fn test_get_user_served_from_cache() {
        let state = test_state();
        state
            .cache
            .set(
                "http://127.0.0.1:1/users/7",
                json!({"id": 7, "name": "Kurtis", "username": "kw", "email": "k@w.io"}),
                SetOptions::default(),
            )
            .await;

        let user = get_user_handler(State(state), Path(7)).await.unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Kurtis");
    }

    #[tokio::test]
    async fn test_get_user_upstream_failure() {
        let result = get_user_handler(State(test_state()), Path(1)).await;
        assert!(matches!(result, Err(ApiError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_list_users_fallback_is_empty() {
        let response = list_users_handler(State(test_state())).await;
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_entry_status_and_delete() {
        let state = test_state();
        state.cache.set("k", json!(1), SetOptions::default()).await;

        let query = || Query(EntryQuery { key: "k".to_string() });

        let status = entry_status_handler(State(state.clone()), query()).await.unwrap();
        assert!(status.present);

        let deleted = delete_entry_handler(State(state.clone()), query()).await.unwrap();
        assert!(deleted.removed);

        let status = entry_status_handler(State(state), query()).await.unwrap();
        assert!(!status.present);
    }

    #[tokio::test]
    async fn test_entry_rejects_empty_key() {
        let result = entry_status_handler(
            State(test_state()),
            Query(EntryQuery { key: String::new() }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_and_clear_handlers() {
        let state = test_state();
        state.cache.set("k", json!(1), SetOptions::default()).await;
        state.cache.get("k").await;

        let stats = stats_handler(State(state.clone())).await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.size, 1);

        clear_handler(State(state.clone())).await;
        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.0, CacheStats::default());
    }

    #[tokio::test]
    async fn test_cleanup_handler_nothing_expired() {
        let state = test_state();
        state.cache.set("k", json!(1), SetOptions::default()).await;

        let response = cleanup_handler(State(state)).await;
        assert_eq!(response.removed, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
