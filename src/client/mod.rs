//! Upstream API clients.

mod users;

pub use users::UserClient;
