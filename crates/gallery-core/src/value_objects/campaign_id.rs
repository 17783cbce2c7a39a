//! Campaign identifier - opaque string key assigned by the hosted backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque campaign identifier.
///
/// The hosted backend owns id generation; the dashboard only passes ids
/// through, so the only local invariant is non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    /// Create a new CampaignId from a raw string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id and return the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parse from string representation, rejecting blank ids
    pub fn parse(s: &str) -> Result<Self, CampaignIdParseError> {
        if s.trim().is_empty() {
            return Err(CampaignIdParseError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

/// Error when parsing a CampaignId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CampaignIdParseError {
    #[error("campaign id must not be empty")]
    Empty,
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CampaignId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CampaignId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for CampaignId {
    type Err = CampaignIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampaignId::parse(s)
    }
}
