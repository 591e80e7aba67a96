use crate::enums::{ActivityOutcome, ActivityType};
use crate::shared::search::{contains_ignore_case, Searchable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityId(pub String);

impl ActivityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActivityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One logged customer interaction. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub customer: String,
    pub rep: String,
    pub outcome: ActivityOutcome,
    pub timestamp: DateTime<Utc>,
    pub notes: String,
    pub location: String,
    /// Set only for activities logged through the form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_follow_up: Option<DateTime<Utc>>,
}

impl Activity {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ActivityId,
        activity_type: ActivityType,
        customer: impl Into<String>,
        rep: impl Into<String>,
        outcome: ActivityOutcome,
        timestamp: DateTime<Utc>,
        notes: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            activity_type,
            customer: customer.into(),
            rep: rep.into(),
            outcome,
            timestamp,
            notes: notes.into(),
            location: location.into(),
            order_value: None,
            next_follow_up: None,
        }
    }
}

/// Customer, rep, notes and location take part in the feed search.
impl Searchable for Activity {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ignore_case(&self.customer, needle)
            || contains_ignore_case(&self.rep, needle)
            || contains_ignore_case(&self.notes, needle)
            || contains_ignore_case(&self.location, needle)
    }
}
