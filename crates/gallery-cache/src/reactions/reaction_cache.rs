//! In-memory reaction cache
//!
//! Holds the last known per-campaign reaction snapshot (aggregate counts plus
//! the viewer's own state). Views read snapshots; the reaction controller is
//! the only writer, through `apply_optimistic`, `reconcile`, and `restore`.
//!
//! A missing entry means "not yet loaded". An entry with empty counts is a
//! genuine, loaded zero - the two are never conflated.

use std::collections::HashMap;

use parking_lot::RwLock;

use gallery_core::{CampaignId, CampaignReactions, ReactionKind, ReactionToggle};

/// Record of one optimistic application, kept so the controller can roll the
/// campaign back to its exact pre-change state if the mutation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimisticChange {
    /// Snapshot before the change; `None` when the campaign was not loaded
    pub previous: Option<CampaignReactions>,
    /// What the toggle did, so the controller knows which remote call to issue
    pub toggle: ReactionToggle,
}

/// Session-wide reaction cache
///
/// Entries are retained for the lifetime of the session; campaign cardinality
/// on a dashboard is small enough that eviction buys nothing.
#[derive(Debug, Default)]
pub struct ReactionCache {
    entries: RwLock<HashMap<CampaignId, CampaignReactions>>,
}

impl ReactionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current snapshot for a campaign
    ///
    /// Returns `None` when the campaign has not been loaded yet - callers
    /// must not treat that as a zero count.
    pub fn snapshot(&self, campaign_id: &CampaignId) -> Option<CampaignReactions> {
        self.entries.read().get(campaign_id).cloned()
    }

    /// Flip the viewer's own reaction state immediately, before any network
    /// confirmation.
    ///
    /// Toggle semantics: the same kind clears the reaction, a different kind
    /// replaces it, and no prior reaction adds it. A campaign that was never
    /// loaded starts from an empty snapshot.
    ///
    /// Returns the pre-change snapshot and the applied toggle for the
    /// controller to confirm or roll back.
    pub fn apply_optimistic(
        &self,
        campaign_id: &CampaignId,
        kind: ReactionKind,
    ) -> OptimisticChange {
        let mut entries = self.entries.write();
        let previous = entries.get(campaign_id).cloned();
        let entry = entries.entry(campaign_id.clone()).or_default();
        let toggle = entry.toggle(kind);

        tracing::debug!(
            campaign_id = %campaign_id,
            kind = %kind,
            toggle = ?toggle,
            "Applied optimistic reaction change"
        );

        OptimisticChange { previous, toggle }
    }

    /// Overwrite the snapshot with authoritative server values
    pub fn reconcile(&self, campaign_id: &CampaignId, snapshot: CampaignReactions) {
        self.entries.write().insert(campaign_id.clone(), snapshot);
    }

    /// Roll a campaign back to a previously captured snapshot.
    ///
    /// `None` removes the entry entirely, so a failed toggle on a
    /// never-loaded campaign leaves it "not loaded" again.
    pub fn restore(&self, campaign_id: &CampaignId, previous: Option<CampaignReactions>) {
        let mut entries = self.entries.write();
        match previous {
            Some(snapshot) => {
                entries.insert(campaign_id.clone(), snapshot);
            }
            None => {
                entries.remove(campaign_id);
            }
        }
    }

    /// Clear every cached own-reaction state.
    ///
    /// Called when the signed-in user changes; aggregate counts stay until
    /// the next refetch re-derives own state for the new user.
    pub fn reset_own_state(&self) {
        let mut entries = self.entries.write();
        for entry in entries.values_mut() {
            entry.own = None;
        }
    }

    /// Number of loaded campaigns
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if nothing has been loaded yet
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
