//! Reaction record <-> entity mapper

use gallery_core::{CampaignId, DomainError, Reaction, ReactionKind, UserId};

use crate::models::{ReactionRecord, ReactionUpsertRecord};

impl TryFrom<ReactionRecord> for Reaction {
    type Error = DomainError;

    fn try_from(record: ReactionRecord) -> Result<Self, Self::Error> {
        let kind: ReactionKind = record
            .kind
            .parse()
            .map_err(|_| DomainError::InvalidReactionKind(record.kind.clone()))?;

        let user_id = UserId::parse(&record.user_id)
            .map_err(|_| DomainError::Validation("reaction user id is not a UUID".to_string()))?;

        Ok(Reaction {
            campaign_id: CampaignId::new(record.campaign_id),
            user_id,
            kind,
            created_at: record.created_at,
        })
    }
}

impl ReactionUpsertRecord {
    /// Build the upsert payload for a (campaign, user, kind) triple
    pub fn new(campaign_id: &CampaignId, user_id: UserId, kind: ReactionKind) -> Self {
        Self {
            campaign_id: campaign_id.to_string(),
            user_id: user_id.to_string(),
            kind: kind.to_string(),
        }
    }
}
