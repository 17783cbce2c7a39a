//! Campaign record <-> entity mapper

use gallery_core::{
    Campaign, CampaignId, CampaignPatch, CampaignStatus, DomainError, FlightPeriod, UserId,
};

use crate::models::{CampaignPatchRecord, CampaignRecord};

impl TryFrom<CampaignRecord> for Campaign {
    type Error = DomainError;

    fn try_from(record: CampaignRecord) -> Result<Self, Self::Error> {
        let status: CampaignStatus = record
            .status
            .parse()
            .map_err(|_| DomainError::InvalidStatus(record.status.clone()))?;

        let flight = FlightPeriod::new(record.starts_on, record.ends_on)?;

        let owner_id = record
            .owner_id
            .as_deref()
            .map(UserId::parse)
            .transpose()
            .map_err(|_| DomainError::Validation("campaign owner id is not a UUID".to_string()))?;

        Ok(Campaign {
            id: CampaignId::new(record.id),
            title: record.title,
            description: record.description,
            status,
            budget: record.budget,
            flight,
            channels: record.channels,
            materials: record.materials,
            links: record.links,
            cover_url: record.cover_url,
            owner_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl From<&Campaign> for CampaignRecord {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id.to_string(),
            title: campaign.title.clone(),
            description: campaign.description.clone(),
            status: campaign.status.to_string(),
            budget: campaign.budget,
            starts_on: campaign.flight.starts_on,
            ends_on: campaign.flight.ends_on,
            channels: campaign.channels.clone(),
            materials: campaign.materials.clone(),
            links: campaign.links.clone(),
            cover_url: campaign.cover_url.clone(),
            owner_id: campaign.owner_id.map(|id| id.to_string()),
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

/// Convert a domain patch into its wire shape
pub fn patch_record(patch: &CampaignPatch) -> CampaignPatchRecord {
    CampaignPatchRecord {
        title: patch.title.clone(),
        description: patch.description.clone(),
        status: patch.status.map(|s| s.to_string()),
        budget: patch.budget,
        starts_on: patch.flight.map(|f| f.starts_on),
        ends_on: patch.flight.map(|f| f.ends_on),
        channels: patch.channels.clone(),
        materials: patch.materials.clone(),
        links: patch.links.clone(),
        cover_url: patch.cover_url.clone(),
    }
}
