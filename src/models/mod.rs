//! Domain and transfer models
//!
//! The upstream user record plus the DTOs used for serializing and
//! deserializing HTTP bodies.

pub mod requests;
pub mod responses;
pub mod user;

// Re-export commonly used types
pub use requests::EntryQuery;
pub use responses::{
    CleanupResponse, ClearResponse, DeleteResponse, EntryStatusResponse, HealthResponse,
};
pub use user::User;
