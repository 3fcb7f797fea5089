//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cleanup_handler, clear_handler, delete_entry_handler, entry_status_handler, get_user_handler,
    health_handler, list_users_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /users` - List users (cached)
/// - `GET /users/:id` - Single user (cached)
/// - `GET /cache/stats` - Cache statistics
/// - `DELETE /cache` - Clear the cache
/// - `POST /cache/cleanup` - Sweep expired entries now
/// - `GET /cache/entry?key=` - Check a key
/// - `DELETE /cache/entry?key=` - Remove a key
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/users", get(list_users_handler))
        .route("/users/:id", get(get_user_handler))
        .route("/cache", delete(clear_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/cache/cleanup", post(cleanup_handler))
        .route(
            "/cache/entry",
            get(entry_status_handler).delete(delete_entry_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheService, CacheStore};
    use crate::client::UserClient;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let cache = CacheService::new(CacheStore::new(100, Duration::from_secs(300)));
        let users =
            UserClient::new(reqwest::Client::new(), cache.clone(), "http://127.0.0.1:1", 0).unwrap();
        create_router(AppState::new(cache, users))
    }

    async fn status_of(app: Router, method: &str, uri: &str) -> StatusCode {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of(create_test_app(), "GET", "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cache_admin_endpoints() {
        let app = create_test_app();
        assert_eq!(status_of(app.clone(), "GET", "/cache/stats").await, StatusCode::OK);
        assert_eq!(status_of(app.clone(), "DELETE", "/cache").await, StatusCode::OK);
        assert_eq!(status_of(app.clone(), "POST", "/cache/cleanup").await, StatusCode::OK);
        assert_eq!(status_of(app, "GET", "/cache/entry?key=x").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_entry_without_key_is_rejected() {
        let status = status_of(create_test_app(), "GET", "/cache/entry").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_user_id_must_be_numeric() {
        let status = status_of(create_test_app(), "GET", "/users/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
