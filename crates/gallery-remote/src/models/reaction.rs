//! Reaction wire records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row shape of the reactions table
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionRecord {
    pub campaign_id: String,
    pub user_id: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

/// Upsert payload; the table's (campaign_id, user_id) key makes the backend
/// replace an existing row instead of inserting a second one
#[derive(Debug, Clone, Serialize)]
pub struct ReactionUpsertRecord {
    pub campaign_id: String,
    pub user_id: String,
    pub kind: String,
}
