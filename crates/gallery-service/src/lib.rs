//! # gallery-service
//!
//! Application layer: the services and the reaction controller that view
//! components call, the request/response DTOs, and the dependency context
//! that wires the in-process state to the hosted backend's stores.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CampaignService, PermissionService, ReactionController, RefetchReport,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, ToggleOutcome,
    UploadPolicy, UploadService,
};
