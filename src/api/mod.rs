//! API Module
//!
//! HTTP handlers and routing for the user directory service.
//!
//! # Endpoints
//! - `GET /users`, `GET /users/:id` - Cached reads from the upstream API
//! - `GET /cache/stats` - Cache statistics
//! - `DELETE /cache` - Clear the cache
//! - `POST /cache/cleanup` - Sweep expired entries
//! - `GET|DELETE /cache/entry?key=` - Inspect or remove one entry
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
