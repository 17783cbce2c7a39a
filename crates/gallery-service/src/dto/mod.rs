//! Request and response DTOs for the service layer

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateCampaignRequest, SignInRequest, UpdateCampaignRequest};
pub use responses::{CalendarDay, CalendarMonth, CampaignResponse, ReactionSummary};
