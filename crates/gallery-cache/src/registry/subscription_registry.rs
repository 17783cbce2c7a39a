//! Subscription registry
//!
//! De-duplicates "this view cares about campaign X" signals into the minimal
//! id set the reaction controller refetches. Registration is explicit (called
//! by orchestration code, not a rendering side effect) and never expires:
//! several independent views may reference the same campaign, so removing an
//! id when one view unmounts could starve another that is still mounted.

use std::collections::HashSet;

use parking_lot::RwLock;

use gallery_core::CampaignId;

/// Tracked campaign id set
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    ids: RwLock<HashSet<CampaignId>>,
}

impl SubscriptionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a campaign id. Idempotent: re-adding a tracked id is a no-op.
    ///
    /// Returns `true` when the id was newly added.
    pub fn track(&self, campaign_id: &CampaignId) -> bool {
        let inserted = self.ids.write().insert(campaign_id.clone());
        if inserted {
            tracing::debug!(campaign_id = %campaign_id, "Tracking campaign");
        }
        inserted
    }

    /// Check if a campaign id is tracked
    pub fn contains(&self, campaign_id: &CampaignId) -> bool {
        self.ids.read().contains(campaign_id)
    }

    /// Snapshot of the tracked ids at the time of the call
    pub fn current_set(&self) -> Vec<CampaignId> {
        let mut ids: Vec<_> = self.ids.read().iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of tracked ids
    pub fn len(&self) -> usize {
        self.ids.read().len()
    }

    /// Check if nothing is tracked
    pub fn is_empty(&self) -> bool {
        self.ids.read().is_empty()
    }
}
