//! Auth service
//!
//! Signs users in and out against the hosted identity provider and keeps the
//! local session store in sync.

use chrono::{Duration, Utc};
use tracing::{info, instrument, warn};
use validator::Validate;

use gallery_cache::AuthSession;
use gallery_common::auth::AccessClaims;
use gallery_core::{CurrentUser, DomainError};

use crate::dto::SignInRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Auth service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Exchange credentials for a session and store it
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_in(&self, request: SignInRequest) -> ServiceResult<CurrentUser> {
        request.validate()?;

        let tokens = self
            .ctx
            .identity_provider()
            .sign_in_with_password(&request.email, &request.password)
            .await?;

        let claims = AccessClaims::decode(&tokens.access_token)
            .map_err(|e| DomainError::AuthError(e.to_string()))?;
        let user = claims
            .to_current_user()
            .map_err(|e| DomainError::AuthError(e.to_string()))?;

        let session = AuthSession {
            user: user.clone(),
            access_token: tokens.access_token,
            expires_at: Utc::now() + Duration::seconds(tokens.expires_in),
        };
        self.ctx.session().set_session(session);

        info!(user_id = %user.id, role = %user.role, "User signed in");
        Ok(user)
    }

    /// Invalidate the remote session and clear the local one.
    ///
    /// The local session is cleared even when the remote call fails; a dead
    /// token on the server is harmless, a stale local session is not.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> ServiceResult<()> {
        if let Some(token) = self.ctx.session().access_token() {
            if let Err(e) = self.ctx.identity_provider().sign_out(&token).await {
                warn!(error = %e, "Remote sign-out failed; clearing local session anyway");
            }
        }
        self.ctx.session().clear();
        Ok(())
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.ctx.session().current_user()
    }
}
