//! # gallery-remote
//!
//! HTTP implementations of the domain store ports against the hosted
//! backend: the relational REST interface (campaigns, reactions), the
//! identity endpoints, and object storage. Wire records live in `models`,
//! conversions into domain entities in `mappers`, and the port
//! implementations in `stores`.

pub mod client;
pub mod mappers;
pub mod models;
pub mod stores;

pub use client::RestClient;
pub use stores::{
    RemoteCampaignStore, RemoteFileStore, RemoteIdentityProvider, RemoteReactionStore,
};
