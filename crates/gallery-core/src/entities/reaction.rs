//! Reaction entities - per-user reaction rows and per-campaign aggregates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value_objects::{CampaignId, UserId};

/// Reaction kind - the closed set of sentiments a user can express
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
    Heart,
}

impl ReactionKind {
    /// Every kind in the closed set
    pub const ALL: [ReactionKind; 3] = [Self::Like, Self::Dislike, Self::Heart];
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Like => write!(f, "like"),
            Self::Dislike => write!(f, "dislike"),
            Self::Heart => write!(f, "heart"),
        }
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            "heart" => Ok(Self::Heart),
            _ => Err(format!("Invalid reaction kind: {s}")),
        }
    }
}

/// Reaction row as stored by the remote reaction store.
///
/// The store enforces at most one row per (campaign, user) pair; toggling a
/// different kind replaces the row rather than adding a second one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub campaign_id: CampaignId,
    pub user_id: UserId,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(campaign_id: CampaignId, user_id: UserId, kind: ReactionKind) -> Self {
        Self {
            campaign_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Per-kind aggregate counts for one campaign.
///
/// Counts never go negative; kinds with a zero count are pruned so two
/// aggregates that describe the same tallies always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactionCounts(BTreeMap<ReactionKind, i64>);

impl ReactionCounts {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Build counts from explicit (kind, count) pairs, dropping non-positive entries
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ReactionKind, i64)>) -> Self {
        Self(pairs.into_iter().filter(|(_, n)| *n > 0).collect())
    }

    /// Tally counts from reaction rows
    pub fn tally<'a>(rows: impl IntoIterator<Item = &'a Reaction>) -> Self {
        let mut counts = Self::new();
        for row in rows {
            counts.increment(row.kind);
        }
        counts
    }

    /// Get the count for a kind (zero when absent)
    #[inline]
    pub fn get(&self, kind: ReactionKind) -> i64 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    /// Increment the count for a kind
    pub fn increment(&mut self, kind: ReactionKind) {
        *self.0.entry(kind).or_insert(0) += 1;
    }

    /// Decrement the count for a kind, flooring at zero
    pub fn decrement(&mut self, kind: ReactionKind) {
        if let Some(count) = self.0.get_mut(&kind) {
            *count -= 1;
            if *count <= 0 {
                self.0.remove(&kind);
            }
        }
    }

    /// Total number of reactions across all kinds
    pub fn total(&self) -> i64 {
        self.0.values().sum()
    }

    /// Check if no reactions are recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (kind, count) pairs
    pub fn iter(&self) -> impl Iterator<Item = (ReactionKind, i64)> + '_ {
        self.0.iter().map(|(k, n)| (*k, *n))
    }
}

/// What a single optimistic toggle did to the viewer's own state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionToggle {
    /// No prior reaction; the kind was added
    Added(ReactionKind),
    /// The same kind was toggled again and cleared
    Removed(ReactionKind),
    /// A different kind replaced the previous one
    Replaced {
        previous: ReactionKind,
        current: ReactionKind,
    },
}

/// Cached per-campaign snapshot: aggregate counts plus the viewer's own state.
///
/// The *absence* of a snapshot means "not yet loaded"; an existing snapshot
/// with empty counts is a genuine, loaded zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignReactions {
    pub counts: ReactionCounts,
    pub own: Option<ReactionKind>,
}

impl CampaignReactions {
    /// Derive a snapshot from the store's reaction rows for one campaign
    pub fn from_rows<'a>(
        rows: impl IntoIterator<Item = &'a Reaction> + Clone,
        viewer: Option<UserId>,
    ) -> Self {
        let counts = ReactionCounts::tally(rows.clone());
        let own = viewer.and_then(|user| {
            rows.into_iter()
                .find(|row| row.user_id == user)
                .map(|row| row.kind)
        });
        Self { counts, own }
    }

    /// Apply toggle semantics to the viewer's own state and the counts.
    ///
    /// Same kind clears, a different kind replaces, no prior reaction adds.
    pub fn toggle(&mut self, kind: ReactionKind) -> ReactionToggle {
        match self.own.take() {
            Some(previous) if previous == kind => {
                self.counts.decrement(kind);
                ReactionToggle::Removed(kind)
            }
            Some(previous) => {
                self.counts.decrement(previous);
                self.counts.increment(kind);
                self.own = Some(kind);
                ReactionToggle::Replaced {
                    previous,
                    current: kind,
                }
            }
            None => {
                self.counts.increment(kind);
                self.own = Some(kind);
                ReactionToggle::Added(kind)
            }
        }
    }
}
