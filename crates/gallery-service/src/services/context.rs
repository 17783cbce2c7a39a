//! Service context - dependency container for services
//!
//! Holds the store ports, the in-process state, and the upload policy. The
//! context is constructed once at application start and handed by reference
//! to the services; views never touch the cache or the stores directly.

use std::sync::Arc;

use gallery_cache::{ReactionCache, SessionStore, SubscriptionRegistry};
use gallery_common::config::AppConfig;
use gallery_core::traits::{CampaignStore, FileStore, IdentityProvider, ReactionStore};
use gallery_remote::{
    RemoteCampaignStore, RemoteFileStore, RemoteIdentityProvider, RemoteReactionStore, RestClient,
};

use super::error::ServiceResult;
use super::upload::UploadPolicy;

/// Service context containing all dependencies
///
/// Provides access to:
/// - The hosted backend's stores (campaigns, reactions, files, identity)
/// - The session store and its change-notification stream
/// - The session-wide reaction cache and subscription registry
#[derive(Clone)]
pub struct ServiceContext {
    campaign_store: Arc<dyn CampaignStore>,
    reaction_store: Arc<dyn ReactionStore>,
    file_store: Arc<dyn FileStore>,
    identity_provider: Arc<dyn IdentityProvider>,

    session: SessionStore,
    reaction_cache: Arc<ReactionCache>,
    registry: Arc<SubscriptionRegistry>,

    upload_policy: UploadPolicy,
}

impl ServiceContext {
    /// Wire a context against the hosted backend described by the config
    pub fn from_config(config: &AppConfig) -> ServiceResult<Self> {
        let session = SessionStore::new();
        let client = RestClient::new(&config.backend, session.clone())?;

        ServiceContextBuilder::new()
            .campaign_store(Arc::new(RemoteCampaignStore::new(client.clone())))
            .reaction_store(Arc::new(RemoteReactionStore::new(client.clone())))
            .file_store(Arc::new(RemoteFileStore::new(
                client.clone(),
                config.storage.bucket.clone(),
            )))
            .identity_provider(Arc::new(RemoteIdentityProvider::new(client)))
            .session(session)
            .upload_policy(UploadPolicy::from_config(&config.storage))
            .build()
    }

    // === Stores ===

    /// Get the campaign store
    pub fn campaign_store(&self) -> &dyn CampaignStore {
        self.campaign_store.as_ref()
    }

    /// Get the reaction store
    pub fn reaction_store(&self) -> &dyn ReactionStore {
        self.reaction_store.as_ref()
    }

    /// Get the file store
    pub fn file_store(&self) -> &dyn FileStore {
        self.file_store.as_ref()
    }

    /// Get the identity provider
    pub fn identity_provider(&self) -> &dyn IdentityProvider {
        self.identity_provider.as_ref()
    }

    // === In-process state ===

    /// Get the session store
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Get the reaction cache
    pub fn reaction_cache(&self) -> &ReactionCache {
        self.reaction_cache.as_ref()
    }

    /// Get the subscription registry
    pub fn registry(&self) -> &SubscriptionRegistry {
        self.registry.as_ref()
    }

    // === Policies ===

    /// Get the upload policy
    pub fn upload_policy(&self) -> &UploadPolicy {
        &self.upload_policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("stores", &"...")
            .field("reaction_cache", &self.reaction_cache)
            .field("registry", &self.registry)
            .field("upload_policy", &self.upload_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom dependencies
pub struct ServiceContextBuilder {
    campaign_store: Option<Arc<dyn CampaignStore>>,
    reaction_store: Option<Arc<dyn ReactionStore>>,
    file_store: Option<Arc<dyn FileStore>>,
    identity_provider: Option<Arc<dyn IdentityProvider>>,
    session: Option<SessionStore>,
    reaction_cache: Option<Arc<ReactionCache>>,
    registry: Option<Arc<SubscriptionRegistry>>,
    upload_policy: Option<UploadPolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            campaign_store: None,
            reaction_store: None,
            file_store: None,
            identity_provider: None,
            session: None,
            reaction_cache: None,
            registry: None,
            upload_policy: None,
        }
    }

    pub fn campaign_store(mut self, store: Arc<dyn CampaignStore>) -> Self {
        self.campaign_store = Some(store);
        self
    }

    pub fn reaction_store(mut self, store: Arc<dyn ReactionStore>) -> Self {
        self.reaction_store = Some(store);
        self
    }

    pub fn file_store(mut self, store: Arc<dyn FileStore>) -> Self {
        self.file_store = Some(store);
        self
    }

    pub fn identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity_provider = Some(provider);
        self
    }

    pub fn session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    pub fn reaction_cache(mut self, cache: Arc<ReactionCache>) -> Self {
        self.reaction_cache = Some(cache);
        self
    }

    pub fn registry(mut self, registry: Arc<SubscriptionRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = Some(policy);
        self
    }

    /// Build the ServiceContext
    ///
    /// The four store ports are required; session, cache, registry, and
    /// upload policy fall back to fresh defaults.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            campaign_store: self
                .campaign_store
                .ok_or_else(|| ServiceError::validation("campaign_store is required"))?,
            reaction_store: self
                .reaction_store
                .ok_or_else(|| ServiceError::validation("reaction_store is required"))?,
            file_store: self
                .file_store
                .ok_or_else(|| ServiceError::validation("file_store is required"))?,
            identity_provider: self
                .identity_provider
                .ok_or_else(|| ServiceError::validation("identity_provider is required"))?,
            session: self.session.unwrap_or_default(),
            reaction_cache: self.reaction_cache.unwrap_or_default(),
            registry: self.registry.unwrap_or_default(),
            upload_policy: self.upload_policy.unwrap_or_default(),
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
