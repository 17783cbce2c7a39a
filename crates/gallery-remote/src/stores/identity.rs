//! Hosted-backend implementation of IdentityProvider

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use tracing::instrument;

use gallery_core::traits::{AuthTokens, IdentityProvider, StoreResult};
use gallery_core::DomainError;

use crate::client::RestClient;
use crate::models::SignInResponse;

use super::error::error_detail;

/// Hosted identity-provider implementation
#[derive(Debug, Clone)]
pub struct RemoteIdentityProvider {
    client: RestClient,
}

impl RemoteIdentityProvider {
    /// Create a new RemoteIdentityProvider
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityProvider for RemoteIdentityProvider {
    #[instrument(skip(self, password))]
    async fn sign_in_with_password(&self, email: &str, password: &str) -> StoreResult<AuthTokens> {
        let response = self
            .client
            .request(Method::POST, "auth/v1/token")
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| DomainError::AuthError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::AuthError(error_detail(response).await));
        }

        let body: SignInResponse = response
            .json()
            .await
            .map_err(|e| DomainError::AuthError(e.to_string()))?;

        Ok(AuthTokens {
            access_token: body.access_token,
            refresh_token: body.refresh_token,
            expires_in: body.expires_in,
        })
    }

    #[instrument(skip(self, access_token))]
    async fn sign_out(&self, access_token: &str) -> StoreResult<()> {
        let response = self
            .client
            .request_with_token(Method::POST, "auth/v1/logout", access_token)
            .send()
            .await
            .map_err(|e| DomainError::AuthError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::AuthError(error_detail(response).await));
        }
        Ok(())
    }
}
