//! Request DTOs
//!
//! All mutating request DTOs implement `Deserialize` and `Validate` for
//! input validation before any network call.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use gallery_core::CampaignStatus;

// ============================================================================
// Auth Requests
// ============================================================================

/// Sign-in request (password grant)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

// ============================================================================
// Campaign Requests
// ============================================================================

/// Create campaign request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCampaignRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Budget must be non-negative"))]
    pub budget: f64,

    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,

    #[serde(default)]
    pub channels: Vec<String>,

    #[serde(default)]
    pub links: Vec<String>,
}

/// Update campaign request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCampaignRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub status: Option<CampaignStatus>,

    #[validate(range(min = 0.0, message = "Budget must be non-negative"))]
    pub budget: Option<f64>,

    /// Both dates must be given together to move the flight period
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,

    pub channels: Option<Vec<String>>,
    pub materials: Option<Vec<String>>,
    pub links: Option<Vec<String>>,
    pub cover_url: Option<String>,
}
