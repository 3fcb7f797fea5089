//! Outbound request descriptor.

use axum::http::Method;
use reqwest::Url;

/// Method and fully resolved URL of an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Absolute URL including any query string
    pub url: String,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Key under which a response to this request is cached.
    pub fn cache_key(&self) -> String {
        self.url.clone()
    }
}

impl From<Url> for RequestDescriptor {
    /// A GET for `url`.
    fn from(url: Url) -> Self {
        Self::get(url.to_string())
    }
}
