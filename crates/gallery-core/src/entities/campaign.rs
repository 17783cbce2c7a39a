//! Campaign entity - an advertising campaign record in the gallery

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{CampaignId, FlightPeriod, UserId};

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    /// Check if the campaign is currently running
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Active => write!(f, "active"),
            Self::Paused => write!(f, "paused"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Invalid campaign status: {s}")),
        }
    }
}

/// Campaign entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub description: Option<String>,
    pub status: CampaignStatus,
    pub budget: f64,
    pub flight: FlightPeriod,
    pub channels: Vec<String>,
    pub materials: Vec<String>,
    pub links: Vec<String>,
    pub cover_url: Option<String>,
    pub owner_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Create a new draft Campaign
    pub fn new(id: CampaignId, title: String, flight: FlightPeriod) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: None,
            status: CampaignStatus::Draft,
            budget: 0.0,
            flight,
            channels: Vec::new(),
            materials: Vec::new(),
            links: Vec::new(),
            cover_url: None,
            owner_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user owns this campaign
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == Some(user_id)
    }

    /// Check if the campaign is live on a given date
    pub fn is_live_on(&self, date: chrono::NaiveDate) -> bool {
        self.status.is_active() && self.flight.contains(date)
    }

    /// Update the campaign status
    pub fn set_status(&mut self, status: CampaignStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Update the campaign title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Update the campaign cover image URL
    pub fn set_cover_url(&mut self, cover_url: Option<String>) {
        self.cover_url = cover_url;
        self.updated_at = Utc::now();
    }
}

/// Partial-field campaign update, mirroring the remote store's upsert contract.
///
/// `None` fields are left untouched by the update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CampaignStatus>,
    pub budget: Option<f64>,
    pub flight: Option<FlightPeriod>,
    pub channels: Option<Vec<String>>,
    pub materials: Option<Vec<String>>,
    pub links: Option<Vec<String>>,
    pub cover_url: Option<String>,
}

impl CampaignPatch {
    /// Check if the patch carries no changes at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.budget.is_none()
            && self.flight.is_none()
            && self.channels.is_none()
            && self.materials.is_none()
            && self.links.is_none()
            && self.cover_url.is_none()
    }
}
