//! Store ports - interfaces to the hosted backend services

mod stores;

pub use stores::{
    AuthTokens, CampaignQuery, CampaignStore, FileStore, IdentityProvider, ReactionStore,
    StoreResult, UploadedFile,
};
