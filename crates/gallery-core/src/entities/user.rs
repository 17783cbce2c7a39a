//! Current user entity and dashboard roles

use serde::{Deserialize, Serialize};

use crate::value_objects::{Permissions, UserId};

/// Dashboard role carried in the hosted provider's access token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Viewer,
    Editor,
    Admin,
}

impl Role {
    /// Permission set granted by the role
    pub fn permissions(&self) -> Permissions {
        match self {
            Self::Viewer => Permissions::DEFAULT,
            Self::Editor => {
                Permissions::DEFAULT | Permissions::EDIT_CAMPAIGNS | Permissions::UPLOAD_FILES
            }
            Self::Admin => Permissions::ADMINISTRATOR,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Viewer => write!(f, "viewer"),
            Self::Editor => write!(f, "editor"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "viewer" => Ok(Self::Viewer),
            "editor" => Ok(Self::Editor),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

/// The signed-in user as derived from the hosted provider's session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: Option<String>,
    pub role: Role,
}

impl CurrentUser {
    /// Create a new CurrentUser
    pub fn new(id: UserId, email: Option<String>, role: Role) -> Self {
        Self { id, email, role }
    }

    /// Check a permission against the user's role
    #[inline]
    pub fn can(&self, permission: Permissions) -> bool {
        self.role.permissions().has(permission)
    }
}
