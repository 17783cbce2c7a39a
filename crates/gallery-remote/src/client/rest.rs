//! Shared REST client for the hosted backend
//!
//! One `reqwest::Client` is shared by every store. Each request carries the
//! project api key; the Authorization header uses the signed-in session's
//! access token when one exists and falls back to the api key otherwise
//! (anonymous reads).

use std::time::Duration;

use reqwest::Method;

use gallery_cache::SessionStore;
use gallery_common::config::BackendConfig;
use gallery_core::DomainError;

/// Shared HTTP handle the remote stores borrow
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    session: SessionStore,
}

impl RestClient {
    /// Create a new RestClient from backend configuration
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed
    pub fn new(config: &BackendConfig, session: SessionStore) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| DomainError::RemoteError(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            session,
        })
    }

    /// Absolute URL for a backend path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request with api-key and bearer headers applied
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let token = self
            .session
            .access_token()
            .unwrap_or_else(|| self.api_key.clone());

        self.http
            .request(method, self.url(path))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
    }

    /// Start a request authorized with an explicit token instead of the
    /// session's (used by sign-out, where the session may already be cleared)
    pub fn request_with_token(
        &self,
        method: Method,
        path: &str,
        token: &str,
    ) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
    }
}
