//! Request Interceptor Module
//!
//! Serves repeated GET requests from the cache and records fresh responses.

mod event;
mod request;

pub use event::HttpEvent;
pub use request::RequestDescriptor;

use std::future::Future;

use axum::http::Method;
use tracing::debug;

use crate::cache::{CacheService, SetOptions};

// == Cache Interceptor ==
/// Wraps outbound calls with a read-through cache keyed by request URL.
#[derive(Debug)]
pub struct CacheInterceptor<T> {
    cache: CacheService<T>,
}

impl<T> Clone for CacheInterceptor<T> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> CacheInterceptor<T> {
    pub fn new(cache: CacheService<T>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &CacheService<T> {
        &self.cache
    }

    /// Runs `request` through the cache, calling `next` only when needed.
    ///
    /// Non-GET requests go straight to `next`. A GET hit returns the cached
    /// response without calling `next`. On a miss, a successful
    /// [`HttpEvent::Response`] is stored under the request URL with the
    /// default TTL; other events and every error pass through untouched.
    pub async fn intercept<F, Fut, E>(
        &self,
        request: RequestDescriptor,
        next: F,
    ) -> Result<HttpEvent<T>, E>
    where
        F: FnOnce(RequestDescriptor) -> Fut,
        Fut: Future<Output = Result<HttpEvent<T>, E>>,
    {
        if request.method != Method::GET {
            return next(request).await;
        }

        let key = request.cache_key();

        if let Some(cached) = self.cache.get(&key).await {
            debug!(key = %key, "cache hit");
            return Ok(HttpEvent::Response(cached));
        }
        debug!(key = %key, "cache miss");

        let event = next(request).await?;
        if let HttpEvent::Response(response) = &event {
            self.cache
                .set(key, response.clone(), SetOptions::default())
                .await;
        }
        Ok(event)
    }
}
