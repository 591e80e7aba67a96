use crate::enums::PaymentStatus;
use crate::shared::aging::{calculate_aging_days, AgingBucket};
use crate::shared::search::{contains_ignore_case, Searchable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentId(pub String);

impl PaymentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Overview alert record
// ============================================================================

/// Receivable shown in the overview alerts.
///
/// `aging_days` and `status` are derived from `due_date`; call
/// [`Payment::refresh`] whenever "now" moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub customer: String,
    pub amount: f64,
    pub due_date: DateTime<Utc>,
    pub status: PaymentStatus,
    pub aging_days: i64,
}

impl Payment {
    pub fn new(
        id: PaymentId,
        customer: impl Into<String>,
        amount: f64,
        due_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut payment = Self {
            id,
            customer: customer.into(),
            amount,
            due_date,
            status: PaymentStatus::Pending,
            aging_days: 0,
        };
        payment.refresh(now);
        payment
    }

    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.aging_days = calculate_aging_days(self.due_date, now);
        self.status = PaymentStatus::classify_alert(self.aging_days);
    }

    pub fn is_overdue(&self) -> bool {
        self.status == PaymentStatus::Overdue
    }

    pub fn aging_bucket(&self) -> AgingBucket {
        AgingBucket::from_days(self.aging_days)
    }
}

// ============================================================================
// Payments page record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCustomer {
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHistory {
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingPayment {
    pub id: PaymentId,
    pub customer: PaymentCustomer,
    pub invoices: Vec<String>,
    pub amount: f64,
    pub due_date: DateTime<Utc>,
    pub aging_days: i64,
    pub aging_bucket: AgingBucket,
    pub last_reminder: Option<DateTime<Utc>>,
    pub status: PaymentStatus,
    pub payment_history: Vec<PaymentHistory>,
}

impl OutstandingPayment {
    pub fn new(
        id: PaymentId,
        customer: PaymentCustomer,
        invoices: Vec<String>,
        amount: f64,
        due_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut payment = Self {
            id,
            customer,
            invoices,
            amount,
            due_date,
            aging_days: 0,
            aging_bucket: AgingBucket::NotDue,
            last_reminder: None,
            status: PaymentStatus::Current,
            payment_history: Vec::new(),
        };
        payment.refresh(now);
        payment
    }

    /// Recomputes aging days, bucket and status against `now`.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.aging_days = calculate_aging_days(self.due_date, now);
        self.aging_bucket = AgingBucket::from_days(self.aging_days);
        self.status = PaymentStatus::classify(self.aging_days);
    }

    pub fn total_paid(&self) -> f64 {
        self.payment_history.iter().map(|h| h.amount).sum()
    }
}

/// Payments page search: customer name and contact person.
impl Searchable for OutstandingPayment {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ignore_case(&self.customer.name, needle)
            || contains_ignore_case(&self.customer.contact_person, needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_payment_derives_from_due_date() {
        let now = now();
        let mut p = Payment::new(PaymentId::new("1"), "PQR Traders", 95_000.0, now - Duration::days(15), now);
        assert_eq!(p.aging_days, 15);
        assert!(p.is_overdue());

        p.refresh(now - Duration::days(20));
        assert_eq!(p.aging_days, -5);
        assert_eq!(p.status, PaymentStatus::Pending);
    }

    #[test]
    fn test_outstanding_payment_refresh() {
        let now = now();
        let customer = PaymentCustomer {
            id: "c1".into(),
            name: "ABC Corporation Ltd".into(),
            contact_person: "Rajesh Mehta".into(),
            phone: "+91 98765 43210".into(),
            email: "rajesh@abccorp.in".into(),
        };
        let p = OutstandingPayment::new(
            PaymentId::new("op1"),
            customer,
            vec!["INV-2024-001".into()],
            185_000.0,
            now + Duration::days(3),
            now,
        );
        assert_eq!(p.aging_days, -3);
        assert_eq!(p.aging_bucket, AgingBucket::NotDue);
        assert_eq!(p.status, PaymentStatus::DueSoon);
        assert!(p.matches_filter("mehta"));
        assert!(!p.matches_filter("mumbai"));
    }
}
