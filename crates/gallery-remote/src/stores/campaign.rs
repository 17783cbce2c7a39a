//! Hosted-backend implementation of CampaignStore

use async_trait::async_trait;
use reqwest::Method;
use tracing::instrument;

use gallery_core::traits::{CampaignQuery, CampaignStore, StoreResult};
use gallery_core::{Campaign, CampaignId, CampaignPatch, DomainError};

use crate::client::RestClient;
use crate::mappers::patch_record;
use crate::models::CampaignRecord;

use super::error::{ensure_success, map_transport_error};

const CAMPAIGNS_PATH: &str = "rest/v1/campaigns";

/// Hosted-backend implementation of CampaignStore
#[derive(Debug, Clone)]
pub struct RemoteCampaignStore {
    client: RestClient,
}

impl RemoteCampaignStore {
    /// Create a new RemoteCampaignStore
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn decode(records: Vec<CampaignRecord>) -> StoreResult<Vec<Campaign>> {
        records.into_iter().map(Campaign::try_from).collect()
    }
}

/// Build the filter parameters for a campaign listing
fn list_params(query: &CampaignQuery) -> Vec<(String, String)> {
    let mut params = vec![
        ("select".to_string(), "*".to_string()),
        ("order".to_string(), "starts_on.asc".to_string()),
    ];
    if let Some(status) = query.status {
        params.push(("status".to_string(), format!("eq.{status}")));
    }
    if let Some(date) = query.active_on {
        params.push(("starts_on".to_string(), format!("lte.{date}")));
        params.push(("ends_on".to_string(), format!("gte.{date}")));
    }
    if let Some(search) = &query.search {
        params.push(("title".to_string(), format!("ilike.*{search}*")));
    }
    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    params
}

#[async_trait]
impl CampaignStore for RemoteCampaignStore {
    #[instrument(skip(self))]
    async fn list(&self, query: &CampaignQuery) -> StoreResult<Vec<Campaign>> {
        let response = self
            .client
            .request(Method::GET, CAMPAIGNS_PATH)
            .query(&list_params(query))
            .send()
            .await
            .map_err(map_transport_error)?;

        let records: Vec<CampaignRecord> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(map_transport_error)?;

        Self::decode(records)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &CampaignId) -> StoreResult<Option<Campaign>> {
        let id_filter = format!("eq.{id}");
        let response = self
            .client
            .request(Method::GET, CAMPAIGNS_PATH)
            .query(&[("select", "*"), ("id", id_filter.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;

        let records: Vec<CampaignRecord> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(map_transport_error)?;

        Ok(Self::decode(records)?.into_iter().next())
    }

    #[instrument(skip(self, campaign))]
    async fn create(&self, campaign: &Campaign) -> StoreResult<Campaign> {
        let record = CampaignRecord::from(campaign);
        let response = self
            .client
            .request(Method::POST, CAMPAIGNS_PATH)
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await
            .map_err(map_transport_error)?;

        let records: Vec<CampaignRecord> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(map_transport_error)?;

        Self::decode(records)?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::RemoteError("create returned no record".to_string()))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &CampaignId, patch: &CampaignPatch) -> StoreResult<Campaign> {
        let id_filter = format!("eq.{id}");
        let response = self
            .client
            .request(Method::PATCH, CAMPAIGNS_PATH)
            .query(&[("id", id_filter.as_str())])
            .header("Prefer", "return=representation")
            .json(&patch_record(patch))
            .send()
            .await
            .map_err(map_transport_error)?;

        let records: Vec<CampaignRecord> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(map_transport_error)?;

        Self::decode(records)?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::CampaignNotFound(id.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &CampaignId) -> StoreResult<()> {
        let id_filter = format!("eq.{id}");
        let response = self
            .client
            .request(Method::DELETE, CAMPAIGNS_PATH)
            .query(&[("id", id_filter.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;

        ensure_success(response).await?;
        Ok(())
    }
}
