//! User identifier - UUID subject issued by the hosted identity provider

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// User identifier (hosted-auth UUID subject)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a new UserId from a Uuid
    #[inline]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner Uuid
    #[inline]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|_| UserIdParseError::InvalidFormat)
    }
}

/// Error when parsing a UserId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("invalid user id format")]
    InvalidFormat,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}
