//! Response DTOs handed to view components

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use gallery_core::{CampaignId, CampaignStatus, ReactionCounts, ReactionKind};

/// Campaign as rendered by list, detail, and calendar views
#[derive(Debug, Clone, Serialize)]
pub struct CampaignResponse {
    pub id: CampaignId,
    pub title: String,
    pub description: Option<String>,
    pub status: CampaignStatus,
    pub budget: f64,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub channels: Vec<String>,
    pub materials: Vec<String>,
    pub links: Vec<String>,
    pub cover_url: Option<String>,
    pub owner_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Cached reaction state for one campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionSummary {
    pub campaign_id: CampaignId,
    pub counts: ReactionCounts,
    pub own: Option<ReactionKind>,
}

/// One day of the calendar view with the campaigns covering it
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub campaign_ids: Vec<CampaignId>,
}

/// Calendar view of a month
#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
    pub campaigns: Vec<CampaignResponse>,
}
