//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

use crate::value_objects::CampaignId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Campaign not found: {0}")]
    CampaignNotFound(CampaignId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Campaign is not tracked by the registry: {0}")]
    CampaignNotTracked(CampaignId),

    #[error("Invalid campaign status: {0}")]
    InvalidStatus(String),

    #[error("Invalid reaction kind: {0}")]
    InvalidReactionKind(String),

    #[error("Flight period ends ({ends_on}) before it starts ({starts_on})")]
    InvalidFlightPeriod {
        starts_on: NaiveDate,
        ends_on: NaiveDate,
    },

    #[error("Budget must be non-negative, got {0}")]
    NegativeBudget(f64),

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("No user is signed in")]
    AuthRequired,

    #[error("Missing permission: {0}")]
    MissingPermission(String),

    // =========================================================================
    // Upload Errors
    // =========================================================================
    #[error("File too large: {size} bytes (max {max})")]
    FileTooLarge { size: usize, max: usize },

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Remote store error: {0}")]
    RemoteError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Auth error: {0}")]
    AuthError(String),
}

impl DomainError {
    /// Get an error code string for reporting to the embedding UI
    pub fn code(&self) -> &'static str {
        match self {
            Self::CampaignNotFound(_) => "UNKNOWN_CAMPAIGN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::CampaignNotTracked(_) => "CAMPAIGN_NOT_TRACKED",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidReactionKind(_) => "INVALID_REACTION_KIND",
            Self::InvalidFlightPeriod { .. } => "INVALID_FLIGHT_PERIOD",
            Self::NegativeBudget(_) => "NEGATIVE_BUDGET",
            Self::AuthRequired => "AUTH_REQUIRED",
            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::UnsupportedContentType(_) => "UNSUPPORTED_CONTENT_TYPE",
            Self::RemoteError(_) => "REMOTE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::AuthError(_) => "AUTH_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CampaignNotFound(_))
    }

    /// Check if this is a validation error, rejected before any network call
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::CampaignNotTracked(_)
                | Self::InvalidStatus(_)
                | Self::InvalidReactionKind(_)
                | Self::InvalidFlightPeriod { .. }
                | Self::NegativeBudget(_)
                | Self::FileTooLarge { .. }
                | Self::UnsupportedContentType(_)
        )
    }

    /// Check if this is an authentication/authorization error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::AuthRequired | Self::MissingPermission(_))
    }

    /// Check if this is a transient infrastructure failure.
    ///
    /// Transient failures trigger optimistic rollback on mutation and leave
    /// stale-but-present cache values intact on refetch.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RemoteError(_) | Self::StorageError(_))
    }
}
