use serde::{Deserialize, Serialize};

/// Collection status of a receivable, derived from its aging days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Overdue,
    DueSoon,
    Current,
}

/// Window (in days before the due date) that counts as "due soon"
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

impl PaymentStatus {
    /// Status used on the payments page: overdue, due within a week, or current.
    pub fn classify(aging_days: i64) -> Self {
        if aging_days > 0 {
            PaymentStatus::Overdue
        } else if aging_days >= -DUE_SOON_WINDOW_DAYS {
            PaymentStatus::DueSoon
        } else {
            PaymentStatus::Current
        }
    }

    /// Status used by the overview alerts, which only distinguish overdue from pending.
    pub fn classify_alert(aging_days: i64) -> Self {
        if aging_days > 0 {
            PaymentStatus::Overdue
        } else {
            PaymentStatus::Pending
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Overdue => "overdue",
            PaymentStatus::DueSoon => "due_soon",
            PaymentStatus::Current => "current",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::DueSoon => "Due Soon",
            PaymentStatus::Current => "Current",
        }
    }
}
