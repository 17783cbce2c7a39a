//! Access-token claims
//!
//! The hosted identity provider signs and verifies its own tokens; the
//! dashboard only introspects the payload of the session it was handed, so
//! decoding deliberately skips signature validation.

use chrono::Utc;
use gallery_core::{CurrentUser, Role, UserId};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried in the provider's access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user id, UUID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Account email, when the provider includes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Dashboard role claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl AccessClaims {
    /// Decode the payload of an access token without verifying its signature
    ///
    /// # Errors
    /// Returns an error if the token is malformed or the payload does not
    /// carry the expected claims.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;

        decode::<AccessClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Malformed)
    }

    /// Get the user id from the subject claim
    ///
    /// # Errors
    /// Returns an error if the subject is not a UUID
    pub fn user_id(&self) -> Result<UserId, TokenError> {
        self.sub.parse().map_err(|_| TokenError::InvalidSubject)
    }

    /// Dashboard role, defaulting to viewer when the claim is absent
    pub fn role(&self) -> Role {
        self.role
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Build the signed-in user this token describes
    ///
    /// # Errors
    /// Returns an error if the subject claim is not a valid user id
    pub fn to_current_user(&self) -> Result<CurrentUser, TokenError> {
        Ok(CurrentUser::new(
            self.user_id()?,
            self.email.clone(),
            self.role(),
        ))
    }
}

/// Token introspection errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("malformed access token")]
    Malformed,

    #[error("access token subject is not a valid user id")]
    InvalidSubject,
}
