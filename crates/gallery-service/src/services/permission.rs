//! Permission service
//!
//! Role-based access checks against the signed-in user's session.

use gallery_core::{CurrentUser, Permissions};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Permission service
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Require that a user is signed in, returning them
    pub fn require_user(&self) -> ServiceResult<CurrentUser> {
        self.ctx
            .session()
            .current_user()
            .ok_or(ServiceError::AuthRequired)
    }

    /// Require that the signed-in user holds the given permission
    pub fn require(&self, permission: Permissions) -> ServiceResult<CurrentUser> {
        let user = self.require_user()?;
        if !user.can(permission) {
            return Err(ServiceError::permission_denied(label(permission)));
        }
        Ok(user)
    }
}

/// Human-readable name for a permission set
fn label(permission: Permissions) -> String {
    permission
        .iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join("|")
}
