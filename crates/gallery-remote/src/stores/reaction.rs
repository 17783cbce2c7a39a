//! Hosted-backend implementation of ReactionStore
//!
//! The reactions table is keyed on (campaign_id, user_id); the upsert relies
//! on the backend's merge-duplicates conflict resolution to enforce the
//! at-most-one-row-per-user-per-campaign invariant server-side.

use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Method;
use tracing::instrument;

use gallery_core::traits::{ReactionStore, StoreResult};
use gallery_core::{CampaignId, Reaction, ReactionKind, UserId};

use crate::client::RestClient;
use crate::models::{ReactionRecord, ReactionUpsertRecord};

use super::error::{ensure_success, map_transport_error};

const REACTIONS_PATH: &str = "rest/v1/reactions";

/// Ids per bulk-read request, kept below the backend's URL length limit
const FETCH_CHUNK_SIZE: usize = 100;

/// Hosted-backend implementation of ReactionStore
#[derive(Debug, Clone)]
pub struct RemoteReactionStore {
    client: RestClient,
}

impl RemoteReactionStore {
    /// Create a new RemoteReactionStore
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    async fn fetch_chunk(&self, campaign_ids: &[CampaignId]) -> StoreResult<Vec<Reaction>> {
        let campaign_filter = in_filter(campaign_ids);
        let response = self
            .client
            .request(Method::GET, REACTIONS_PATH)
            .query(&[
                ("select", "*"),
                ("campaign_id", campaign_filter.as_str()),
            ])
            .send()
            .await
            .map_err(map_transport_error)?;

        let records: Vec<ReactionRecord> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(map_transport_error)?;

        records.into_iter().map(Reaction::try_from).collect()
    }
}

/// Build an `in.(...)` filter value for a campaign id set
fn in_filter(campaign_ids: &[CampaignId]) -> String {
    let joined = campaign_ids
        .iter()
        .map(|id| format!("\"{id}\""))
        .collect::<Vec<_>>()
        .join(",");
    format!("in.({joined})")
}

#[async_trait]
impl ReactionStore for RemoteReactionStore {
    #[instrument(skip(self), fields(campaigns = campaign_ids.len()))]
    async fn fetch(&self, campaign_ids: &[CampaignId]) -> StoreResult<Vec<Reaction>> {
        if campaign_ids.is_empty() {
            return Ok(Vec::new());
        }

        let chunks = campaign_ids
            .chunks(FETCH_CHUNK_SIZE)
            .map(|chunk| self.fetch_chunk(chunk));
        let results = try_join_all(chunks).await?;

        Ok(results.into_iter().flatten().collect())
    }

    #[instrument(skip(self))]
    async fn put(
        &self,
        campaign_id: &CampaignId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> StoreResult<()> {
        let payload = ReactionUpsertRecord::new(campaign_id, user_id, kind);
        let response = self
            .client
            .request(Method::POST, REACTIONS_PATH)
            .query(&[("on_conflict", "campaign_id,user_id")])
            .header("Prefer", "resolution=merge-duplicates")
            .json(&[payload])
            .send()
            .await
            .map_err(map_transport_error)?;

        ensure_success(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, campaign_id: &CampaignId, user_id: UserId) -> StoreResult<()> {
        let campaign_filter = format!("eq.{campaign_id}");
        let user_filter = format!("eq.{user_id}");
        let response = self
            .client
            .request(Method::DELETE, REACTIONS_PATH)
            .query(&[
                ("campaign_id", campaign_filter.as_str()),
                ("user_id", user_filter.as_str()),
            ])
            .send()
            .await
            .map_err(map_transport_error)?;

        ensure_success(response).await?;
        Ok(())
    }
}
