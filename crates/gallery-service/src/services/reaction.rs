//! Reaction controller
//!
//! The only mutation/query surface for the reactions subsystem. Coordinates
//! the in-memory cache and the subscription registry with the remote
//! reaction store, reconciling optimistic local state against server
//! confirmation.
//!
//! Ordering: every outgoing request for a campaign (toggle or refetch)
//! claims the next value of a per-campaign sequence counter. A response is
//! committed to the cache only while its sequence is still the highest
//! claimed for that campaign; otherwise it is stale and discarded. No
//! ordering is enforced across different campaigns.

use std::collections::HashMap;

use dashmap::DashMap;
use tracing::{debug, instrument, warn};

use gallery_core::{
    CampaignId, CampaignReactions, DomainError, Permissions, Reaction, ReactionKind,
    ReactionToggle,
};

use crate::dto::ReactionSummary;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Result flag of a toggle, reported to the caller instead of an error for
/// anything that happened after the optimistic window opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The store confirmed the mutation and the cache was reconciled with
    /// authoritative values
    Committed,
    /// A newer request for the same campaign superseded this one; its
    /// response was discarded as stale
    Superseded,
    /// The mutation failed; the optimistic change was rolled back to the
    /// exact pre-toggle state
    RolledBack { reason: String },
}

/// Result of a bulk refetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefetchReport {
    /// Campaigns reconciled with fresh server values
    pub refreshed: Vec<CampaignId>,
    /// Campaigns whose response was stale and discarded
    pub discarded: Vec<CampaignId>,
    /// Transport failure, if any; cached values stay intact when set
    pub failure: Option<String>,
}

/// Reaction controller
///
/// Owns the per-campaign sequence counters, so one controller instance must
/// be shared by everything that mutates reactions.
pub struct ReactionController {
    ctx: ServiceContext,
    sequences: DashMap<CampaignId, u64>,
}

impl ReactionController {
    /// Create a new ReactionController over the given context
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            ctx,
            sequences: DashMap::new(),
        }
    }

    /// Register a campaign as "of interest" to the mounted views.
    ///
    /// Idempotent; returns `true` when the id was newly tracked.
    /// Registration never expires.
    pub fn add_campaign(&self, campaign_id: &CampaignId) -> bool {
        self.ctx.registry().track(campaign_id)
    }

    /// Read the cached snapshot for a campaign.
    ///
    /// Returns `None` while the campaign has not been loaded - distinct from
    /// a loaded snapshot with zero reactions.
    pub fn summary(&self, campaign_id: &CampaignId) -> Option<ReactionSummary> {
        self.ctx
            .reaction_cache()
            .snapshot(campaign_id)
            .map(|snapshot| ReactionSummary::new(campaign_id.clone(), &snapshot))
    }

    /// Toggle the signed-in user's reaction on a campaign.
    ///
    /// The cache flips synchronously before the store call, so the UI sees
    /// the change within the same rendering pass. Validation and auth
    /// failures are rejected up front as errors; store failures after the
    /// optimistic window are reported as `ToggleOutcome::RolledBack`.
    #[instrument(skip(self))]
    pub async fn toggle_reaction(
        &self,
        campaign_id: &CampaignId,
        kind: ReactionKind,
    ) -> ServiceResult<ToggleOutcome> {
        // Refuse before any optimistic change when nobody is signed in
        let user = self
            .ctx
            .session()
            .current_user()
            .ok_or(ServiceError::AuthRequired)?;
        if !user.can(Permissions::ADD_REACTIONS) {
            return Err(ServiceError::permission_denied("ADD_REACTIONS"));
        }
        if !self.ctx.registry().contains(campaign_id) {
            return Err(DomainError::CampaignNotTracked(campaign_id.clone()).into());
        }

        // Synchronous optimistic flip; the pre-image is kept for rollback
        let change = self.ctx.reaction_cache().apply_optimistic(campaign_id, kind);
        let sequence = self.next_sequence(campaign_id);

        let result = match change.toggle {
            ReactionToggle::Removed(_) => {
                self.ctx.reaction_store().remove(campaign_id, user.id).await
            }
            ReactionToggle::Added(current) | ReactionToggle::Replaced { current, .. } => {
                self.ctx
                    .reaction_store()
                    .put(campaign_id, user.id, current)
                    .await
            }
        };

        match result {
            Ok(()) => {
                // Read back authoritative rows for this campaign only
                match self
                    .ctx
                    .reaction_store()
                    .fetch(std::slice::from_ref(campaign_id))
                    .await
                {
                    Ok(rows) => {
                        if !self.is_latest(campaign_id, sequence) {
                            debug!(campaign_id = %campaign_id, sequence, "Discarding stale toggle response");
                            return Ok(ToggleOutcome::Superseded);
                        }
                        let snapshot = CampaignReactions::from_rows(rows.iter(), Some(user.id));
                        self.ctx.reaction_cache().reconcile(campaign_id, snapshot);
                        Ok(ToggleOutcome::Committed)
                    }
                    Err(e) => {
                        // The mutation landed; the optimistic value already
                        // matches what the server was told, so keep it and
                        // let the next refetch converge the counts.
                        warn!(campaign_id = %campaign_id, error = %e, "Read-back after toggle failed");
                        Ok(ToggleOutcome::Committed)
                    }
                }
            }
            Err(e) => {
                if self.is_latest(campaign_id, sequence) {
                    self.ctx.reaction_cache().restore(campaign_id, change.previous);
                    warn!(campaign_id = %campaign_id, error = %e, "Toggle failed; optimistic change rolled back");
                    Ok(ToggleOutcome::RolledBack {
                        reason: e.to_string(),
                    })
                } else {
                    // A newer toggle owns the campaign's state now; rolling
                    // back here would clobber its optimistic value.
                    Ok(ToggleOutcome::Superseded)
                }
            }
        }
    }

    /// Bulk-read current counts and own-reaction rows and reconcile the
    /// cache. Defaults to the registry's current set.
    ///
    /// Used for initial hydration and for externally triggered
    /// resynchronization. A transport failure leaves existing cache values
    /// intact and is reported as a non-fatal warning on the report.
    #[instrument(skip(self, ids))]
    pub async fn refetch(&self, ids: Option<&[CampaignId]>) -> ServiceResult<RefetchReport> {
        let targets: Vec<CampaignId> = match ids {
            Some(ids) => ids.to_vec(),
            None => self.ctx.registry().current_set(),
        };
        if targets.is_empty() {
            return Ok(RefetchReport::default());
        }

        let viewer = self.ctx.session().current_user_id();

        // Refetches participate in the per-campaign ordering so an old
        // response can never overwrite a newer optimistic state.
        let sequences: Vec<(CampaignId, u64)> = targets
            .iter()
            .map(|id| (id.clone(), self.next_sequence(id)))
            .collect();

        let rows = match self.ctx.reaction_store().fetch(&targets).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "Refetch failed; keeping cached values");
                return Ok(RefetchReport {
                    failure: Some(e.to_string()),
                    ..RefetchReport::default()
                });
            }
        };

        let mut by_campaign: HashMap<&CampaignId, Vec<&Reaction>> = HashMap::new();
        for row in &rows {
            by_campaign.entry(&row.campaign_id).or_default().push(row);
        }

        let mut report = RefetchReport::default();
        for (campaign_id, sequence) in &sequences {
            if !self.is_latest(campaign_id, *sequence) {
                report.discarded.push(campaign_id.clone());
                continue;
            }
            // A campaign with no rows reconciles to a loaded-empty snapshot,
            // which is observably different from "not loaded".
            let campaign_rows = by_campaign
                .get(campaign_id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let snapshot =
                CampaignReactions::from_rows(campaign_rows.iter().copied(), viewer);
            self.ctx.reaction_cache().reconcile(campaign_id, snapshot);
            report.refreshed.push(campaign_id.clone());
        }

        debug!(
            refreshed = report.refreshed.len(),
            discarded = report.discarded.len(),
            "Refetch reconciled"
        );
        Ok(report)
    }

    /// Follow the session change stream: when the signed-in user changes,
    /// drop every cached own-state and refetch for the new user.
    ///
    /// Runs until the session store is dropped; spawn it from the
    /// application's composition root.
    pub async fn run_session_sync(&self) {
        let mut changes = self.ctx.session().subscribe();
        while changes.changed().await.is_ok() {
            self.ctx.reaction_cache().reset_own_state();
            if let Ok(report) = self.refetch(None).await {
                if let Some(failure) = report.failure {
                    warn!(failure = %failure, "Resync after session change failed");
                }
            }
        }
    }

    /// Claim the next request sequence number for a campaign
    fn next_sequence(&self, campaign_id: &CampaignId) -> u64 {
        let mut entry = self.sequences.entry(campaign_id.clone()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Check whether a claimed sequence is still the newest for a campaign
    fn is_latest(&self, campaign_id: &CampaignId, sequence: u64) -> bool {
        self.sequences
            .get(campaign_id)
            .map(|latest| *latest == sequence)
            .unwrap_or(false)
    }
}
