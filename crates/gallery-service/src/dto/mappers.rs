//! Entity -> response DTO mappers

use gallery_core::{Campaign, CampaignId, CampaignReactions};

use super::responses::{CampaignResponse, ReactionSummary};

impl From<&Campaign> for CampaignResponse {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id.clone(),
            title: campaign.title.clone(),
            description: campaign.description.clone(),
            status: campaign.status,
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

impl ReactionSummary {
    /// Build a summary from a cached snapshot
    pub fn new(campaign_id: CampaignId, snapshot: &CampaignReactions) -> Self {
        Self {
            campaign_id,
            counts: snapshot.counts.clone(),
            own: snapshot.own,
        }
    }
}
