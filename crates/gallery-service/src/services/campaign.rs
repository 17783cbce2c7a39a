//! Campaign service
//!
//! CRUD and calendar views over the hosted campaign store, with validation
//! and role-based permission checks.

use chrono::NaiveDate;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use gallery_core::traits::CampaignQuery;
use gallery_core::{
    Campaign, CampaignId, CampaignPatch, CampaignStatus, FlightPeriod, Permissions,
};

use crate::dto::{CalendarDay, CalendarMonth, CampaignResponse, CreateCampaignRequest, UpdateCampaignRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// Campaign service
pub struct CampaignService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CampaignService<'a> {
    /// Create a new CampaignService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List campaigns matching the query
    #[instrument(skip(self))]
    pub async fn list(&self, query: CampaignQuery) -> ServiceResult<Vec<CampaignResponse>> {
        PermissionService::new(self.ctx).require(Permissions::VIEW_CAMPAIGNS)?;

        let campaigns = self.ctx.campaign_store().list(&query).await?;
        Ok(campaigns.iter().map(CampaignResponse::from).collect())
    }

    /// Get a single campaign
    #[instrument(skip(self))]
    pub async fn get(&self, id: &CampaignId) -> ServiceResult<CampaignResponse> {
        PermissionService::new(self.ctx).require(Permissions::VIEW_CAMPAIGNS)?;

        let campaign = self
            .ctx
            .campaign_store()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Campaign", id.to_string()))?;
        Ok(CampaignResponse::from(&campaign))
    }

    /// Create a new draft campaign owned by the signed-in user
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(&self, request: CreateCampaignRequest) -> ServiceResult<CampaignResponse> {
        let user = PermissionService::new(self.ctx).require(Permissions::EDIT_CAMPAIGNS)?;
        request.validate()?;

        let flight = FlightPeriod::new(request.starts_on, request.ends_on)?;
        let mut campaign = Campaign::new(
            CampaignId::new(Uuid::new_v4().to_string()),
            request.title,
            flight,
        );
        campaign.description = request.description;
        campaign.budget = request.budget;
        campaign.channels = request.channels;
        campaign.links = request.links;
        campaign.owner_id = Some(user.id);

        let created = self.ctx.campaign_store().create(&campaign).await?;
        info!(campaign_id = %created.id, "Campaign created");
        Ok(CampaignResponse::from(&created))
    }

    /// Partial-field update of a campaign
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: &CampaignId,
        request: UpdateCampaignRequest,
    ) -> ServiceResult<CampaignResponse> {
        PermissionService::new(self.ctx).require(Permissions::EDIT_CAMPAIGNS)?;
        request.validate()?;

        let patch = build_patch(request)?;
        if patch.is_empty() {
            return Err(ServiceError::validation("no fields to update"));
        }

        let updated = self.ctx.campaign_store().update(id, &patch).await?;
        info!(campaign_id = %id, "Campaign updated");
        Ok(CampaignResponse::from(&updated))
    }

    /// Change a campaign's lifecycle status
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: &CampaignId,
        status: CampaignStatus,
    ) -> ServiceResult<CampaignResponse> {
        PermissionService::new(self.ctx).require(Permissions::MANAGE_CAMPAIGNS)?;

        let patch = CampaignPatch {
            status: Some(status),
            ..CampaignPatch::default()
        };
        let updated = self.ctx.campaign_store().update(id, &patch).await?;
        info!(campaign_id = %id, status = %status, "Campaign status changed");
        Ok(CampaignResponse::from(&updated))
    }

    /// Delete a campaign
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &CampaignId) -> ServiceResult<()> {
        PermissionService::new(self.ctx).require(Permissions::MANAGE_CAMPAIGNS)?;

        self.ctx.campaign_store().delete(id).await?;
        info!(campaign_id = %id, "Campaign deleted");
        Ok(())
    }

    /// Calendar view: every day of the month with the campaigns whose flight
    /// period covers it
    #[instrument(skip(self))]
    pub async fn calendar(&self, year: i32, month: u32) -> ServiceResult<CalendarMonth> {
        PermissionService::new(self.ctx).require(Permissions::VIEW_CAMPAIGNS)?;
        if !(1..=12).contains(&month) {
            return Err(ServiceError::validation(format!("invalid month: {month}")));
        }

        let campaigns = self.ctx.campaign_store().list(&CampaignQuery::default()).await?;
        let in_month: Vec<&Campaign> = campaigns
            .iter()
            .filter(|c| c.flight.overlaps_month(year, month))
            .collect();

        let days = days_of_month(year, month)
            .map(|date| CalendarDay {
                date,
                campaign_ids: in_month
                    .iter()
                    .filter(|c| c.flight.contains(date))
                    .map(|c| c.id.clone())
                    .collect(),
            })
            .collect();

        Ok(CalendarMonth {
            year,
            month,
            days,
            campaigns: in_month.into_iter().map(CampaignResponse::from).collect(),
        })
    }
}

/// Translate an update request into a domain patch
fn build_patch(request: UpdateCampaignRequest) -> ServiceResult<CampaignPatch> {
    let flight = match (request.starts_on, request.ends_on) {
        (Some(starts_on), Some(ends_on)) => Some(FlightPeriod::new(starts_on, ends_on)?),
        (None, None) => None,
        _ => {
            return Err(ServiceError::validation(
                "flight period requires both starts_on and ends_on",
            ))
        }
    };

    Ok(CampaignPatch {
        title: request.title,
        description: request.description,
        status: request.status,
        budget: request.budget,
        flight,
        channels: request.channels,
        materials: request.materials,
        links: request.links,
        cover_url: request.cover_url,
    })
}

/// Iterate every date of a month
fn days_of_month(year: i32, month: u32) -> impl Iterator<Item = NaiveDate> {
    (1..=31).filter_map(move |day| NaiveDate::from_ymd_opt(year, month, day))
}
