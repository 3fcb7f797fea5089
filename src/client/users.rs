//! User API client
//!
//! Fetches users from the upstream directory through the cache interceptor.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::cache::CacheService;
use crate::config::Config;
use crate::error::FetchError;
use crate::interceptor::{CacheInterceptor, HttpEvent, RequestDescriptor};
use crate::models::User;

// == User Client ==
/// Read-only client for the upstream user API.
///
/// Every request goes through a [`CacheInterceptor`], so repeated reads of the
/// same URL are answered from the cache until the entry expires.
#[derive(Debug, Clone)]
pub struct UserClient {
    http: reqwest::Client,
    interceptor: CacheInterceptor<Value>,
    base_url: Url,
    /// Extra attempts after the first failure
    retries: u32,
}

impl UserClient {
    /// Creates a client rooted at `base_url`, which must be an absolute
    /// http(s) URL.
    pub fn new(
        http: reqwest::Client,
        cache: CacheService<Value>,
        base_url: &str,
        retries: u32,
    ) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| FetchError::InvalidUrl(format!("{}: {}", base_url, err)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                base_url
            )));
        }

        Ok(Self {
            http,
            interceptor: CacheInterceptor::new(cache),
            base_url,
            retries,
        })
    }

    /// Builds a client from configuration, sharing `cache`.
    pub fn from_config(config: &Config, cache: CacheService<Value>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Self::new(http, cache, &config.api_base_url, config.fetch_retries)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // http(s) URLs always have a path to extend
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // == List Users ==
    /// Returns every user, or an empty list once all attempts have failed.
    pub async fn list_users(&self) -> Vec<User> {
        let url = self.endpoint(&["users"]);

        match self.with_retries(|| self.fetch::<Vec<User>>(&url)).await {
            Ok(users) => users,
            Err(err) => {
                warn!(error = %err, "Falling back to an empty user list");
                Vec::new()
            }
        }
    }

    // == Get User ==
    /// Returns one user, `None` when upstream reports it missing.
    pub async fn get_user(&self, id: u64) -> Result<Option<User>, FetchError> {
        let id = id.to_string();
        let url = self.endpoint(&["users", id.as_str()]);

        match self.with_retries(|| self.fetch::<User>(&url)).await {
            Ok(user) => Ok(Some(user)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn with_retries<F, Fut, R>(&self, mut attempt: F) -> Result<R, FetchError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<R, FetchError>>,
    {
        let mut tries = 0;
        loop {
            match attempt().await {
                Ok(value) => return Ok(value),
                // A missing resource will not appear on retry
                Err(err) if err.is_not_found() => return Err(err),
                Err(err) if tries < self.retries => {
                    tries += 1;
                    warn!(error = %err, attempt = tries, "Upstream fetch failed, retrying");
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn fetch<R: DeserializeOwned>(&self, url: &Url) -> Result<R, FetchError> {
        let request = RequestDescriptor::from(url.clone());
        let body = self
            .interceptor
            .intercept(request, |request| self.perform(request))
            .await?
            .into_response()
            .ok_or_else(|| FetchError::Incomplete(url.to_string()))?;

        Ok(serde_json::from_value(body)?)
    }

    async fn perform(&self, request: RequestDescriptor) -> Result<HttpEvent<Value>, FetchError> {
        let response = self
            .http
            .request(request.method.clone(), &request.url)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: request.url,
            });
        }

        Ok(HttpEvent::Response(response.json::<Value>().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheStore, SetOptions};
    use serde_json::json;

    fn cache() -> CacheService<Value> {
        CacheService::new(CacheStore::new(10, Duration::from_secs(60)))
    }

    // Nothing listens on port 1, so every request fails fast
    const DEAD_UPSTREAM: &str = "http://127.0.0.1:1";

    fn client(cache: CacheService<Value>, base_url: &str, retries: u32) -> UserClient {
        UserClient::new(reqwest::Client::new(), cache, base_url, retries).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let users = client(cache(), "http://api.test/", 0);
        assert_eq!(users.endpoint(&["users", "7"]).as_str(), "http://api.test/users/7");

        let nested = client(cache(), "http://api.test/v1", 0);
        assert_eq!(nested.endpoint(&["users"]).as_str(), "http://api.test/v1/users");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let users = client(cache(), "http://api.test", 0);
        assert_eq!(
            users.endpoint(&["users", "a/b?c"]).as_str(),
            "http://api.test/users/a%2Fb%3Fc"
        );
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        for base_url in ["not a url", "ftp://api.test", "mailto:someone@api.test"] {
            let result = UserClient::new(reqwest::Client::new(), cache(), base_url, 0);
            assert!(
                matches!(result, Err(FetchError::InvalidUrl(_))),
                "{} should be rejected",
                base_url
            );
        }
    }

    #[tokio::test]
    async fn test_list_users_falls_back_to_empty() {
        let cache = cache();
        let client = client(cache.clone(), DEAD_UPSTREAM, 2);

        assert!(client.list_users().await.is_empty());

        // Fallback is not cached; each attempt was a miss
        let stats = cache.stats().await;
        assert_eq!(stats.size, 0);
        assert_eq!(stats.misses, 3);
    }

    #[tokio::test]
    async fn test_get_user_transport_error_propagates() {
        let client = client(cache(), DEAD_UPSTREAM, 0);
        let result = client.get_user(1).await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[tokio::test]
    async fn test_cached_body_served_without_network() {
        let cache = cache();
        let client = client(cache.clone(), DEAD_UPSTREAM, 0);

        let body = json!([{"id": 1, "name": "Ann", "username": "ann", "email": "a@x.io"}]);
        cache
            .set(format!("{}/users", DEAD_UPSTREAM), body, SetOptions::default())
            .await;

        let users = client.list_users().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ann");
        assert_eq!(cache.stats().await.hits, 1);
    }

    #[tokio::test]
    async fn test_cached_body_with_wrong_shape_is_decode_error() {
        let cache = cache();
        let client = client(cache.clone(), DEAD_UPSTREAM, 0);

        cache
            .set(format!("{}/users/5", DEAD_UPSTREAM), json!({"nope": true}), SetOptions::default())
            .await;

        assert!(matches!(client.get_user(5).await, Err(FetchError::Decode(_))));
    }
}
