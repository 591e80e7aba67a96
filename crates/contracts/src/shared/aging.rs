//! Payment aging: signed day counts and bucket classification relative to `now`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Labeled range of days past due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgingBucket {
    #[serde(rename = "Not due")]
    NotDue,
    #[serde(rename = "0-30 days")]
    Days0To30,
    #[serde(rename = "30-60 days")]
    Days30To60,
    #[serde(rename = "60-90 days")]
    Days60To90,
    #[serde(rename = "90+ days")]
    Days90Plus,
}

impl AgingBucket {
    /// Buckets of money that is already due, in chart order
    pub const DUE: [AgingBucket; 4] = [
        AgingBucket::Days0To30,
        AgingBucket::Days30To60,
        AgingBucket::Days60To90,
        AgingBucket::Days90Plus,
    ];

    /// Upper bounds are inclusive: 30 days is still "0-30 days".
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => AgingBucket::NotDue,
            0..=30 => AgingBucket::Days0To30,
            31..=60 => AgingBucket::Days30To60,
            61..=90 => AgingBucket::Days60To90,
            _ => AgingBucket::Days90Plus,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgingBucket::NotDue => "Not due",
            AgingBucket::Days0To30 => "0-30 days",
            AgingBucket::Days30To60 => "30-60 days",
            AgingBucket::Days60To90 => "60-90 days",
            AgingBucket::Days90Plus => "90+ days",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Not due" => Some(AgingBucket::NotDue),
            "0-30 days" => Some(AgingBucket::Days0To30),
            "30-60 days" => Some(AgingBucket::Days30To60),
            "60-90 days" => Some(AgingBucket::Days60To90),
            "90+ days" => Some(AgingBucket::Days90Plus),
            _ => None,
        }
    }

    /// Chart color of the aging widget
    pub fn color(&self) -> &'static str {
        match self {
            AgingBucket::NotDue => "#64748B",
            AgingBucket::Days0To30 => "#10B981",
            AgingBucket::Days30To60 => "#F59E0B",
            AgingBucket::Days60To90 => "#F97316",
            AgingBucket::Days90Plus => "#EF4444",
        }
    }
}

impl std::fmt::Display for AgingBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whole days from `due` to `now`; negative while the due date is ahead.
pub fn calculate_aging_days(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - due).num_days()
}

/// Days past due, never negative
pub fn get_days_overdue(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    calculate_aging_days(due, now).max(0)
}

pub fn is_overdue(due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    calculate_aging_days(due, now) > 0
}

pub fn get_aging_bucket(due: DateTime<Utc>, now: DateTime<Utc>) -> AgingBucket {
    AgingBucket::from_days(calculate_aging_days(due, now))
}

pub fn format_days_overdue(days: i64) -> String {
    match days {
        0 => "Due today".to_string(),
        d if d < 0 => format!("Due in {} days", d.abs()),
        1 => "1 day overdue".to_string(),
        d => format!("{} days overdue", d),
    }
}
