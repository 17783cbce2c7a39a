//! Session store
//!
//! Holds the hosted provider's current session (signed-in user plus access
//! token) and exposes a change-notification stream so the reaction controller
//! can re-derive own-reaction state when the user changes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use gallery_core::{CurrentUser, UserId};

/// A signed-in session as handed back by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user: CurrentUser,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Check if the session's access token has expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Current-session holder with change notifications
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Option<AuthSession>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a store with no signed-in session
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Replace the current session after a successful sign-in
    pub fn set_session(&self, session: AuthSession) {
        tracing::info!(user_id = %session.user.id, "Session established");
        self.tx.send_replace(Some(session));
    }

    /// Drop the current session (sign-out or token invalidation)
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    /// The current session, if any
    pub fn session(&self) -> Option<AuthSession> {
        self.tx.borrow().clone()
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.tx.borrow().as_ref().map(|s| s.user.clone())
    }

    /// The signed-in user's id, if any
    pub fn current_user_id(&self) -> Option<UserId> {
        self.tx.borrow().as_ref().map(|s| s.user.id)
    }

    /// The current access token, if any
    pub fn access_token(&self) -> Option<String> {
        self.tx.borrow().as_ref().map(|s| s.access_token.clone())
    }

    /// Subscribe to session changes.
    ///
    /// The receiver observes every sign-in, sign-out, and user switch.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthSession>> {
        self.tx.subscribe()
    }
}
