//! Store ports - define the interfaces to the hosted backend
//!
//! The domain layer declares what it needs from the hosted relational store,
//! identity provider, and object storage; the infrastructure layer provides
//! the HTTP implementations. Tests substitute in-memory fakes.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{Campaign, CampaignPatch, CampaignStatus, Reaction, ReactionKind};
use crate::error::DomainError;
use crate::value_objects::{CampaignId, UserId};

/// Result type for store operations
pub type StoreResult<T> = Result<T, DomainError>;

// ============================================================================
// Campaign Store
// ============================================================================

/// Filter options for campaign listings
#[derive(Debug, Clone, Default)]
pub struct CampaignQuery {
    /// Only campaigns in this status
    pub status: Option<CampaignStatus>,
    /// Only campaigns whose flight period covers this date
    pub active_on: Option<NaiveDate>,
    /// Case-insensitive title substring
    pub search: Option<String>,
    /// Maximum number of records to return
    pub limit: Option<i64>,
}

#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// List campaigns matching the query
    async fn list(&self, query: &CampaignQuery) -> StoreResult<Vec<Campaign>>;

    /// Find a campaign by id
    async fn find_by_id(&self, id: &CampaignId) -> StoreResult<Option<Campaign>>;

    /// Create a new campaign record
    async fn create(&self, campaign: &Campaign) -> StoreResult<Campaign>;

    /// Partial-field update; untouched fields keep their stored values
    async fn update(&self, id: &CampaignId, patch: &CampaignPatch) -> StoreResult<Campaign>;

    /// Delete a campaign record
    async fn delete(&self, id: &CampaignId) -> StoreResult<()>;
}

// ============================================================================
// Reaction Store
// ============================================================================

#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// Bulk-read all reaction rows for the given campaign ids
    async fn fetch(&self, campaign_ids: &[CampaignId]) -> StoreResult<Vec<Reaction>>;

    /// Upsert the user's reaction, replacing any existing row for the
    /// (campaign, user) pair
    async fn put(
        &self,
        campaign_id: &CampaignId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> StoreResult<()>;

    /// Remove the user's reaction row for the campaign, if any
    async fn remove(&self, campaign_id: &CampaignId, user_id: UserId) -> StoreResult<()>;
}

// ============================================================================
// File Store
// ============================================================================

/// A file handed to the upload endpoint
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store the file under the given object name and return its publicly
    /// resolvable URL
    async fn upload(&self, object_name: &str, file: &UploadedFile) -> StoreResult<String>;
}

// ============================================================================
// Identity Provider
// ============================================================================

/// Token pair returned by the hosted identity provider
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: i64,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange credentials for a token pair
    async fn sign_in_with_password(&self, email: &str, password: &str) -> StoreResult<AuthTokens>;

    /// Invalidate the session behind the access token
    async fn sign_out(&self, access_token: &str) -> StoreResult<()>;
}
