//! Identity endpoint payloads

use serde::Deserialize;

/// Response of the password-grant token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: i64,
}
