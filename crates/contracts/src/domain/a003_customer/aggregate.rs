use crate::enums::ActivityType;
use crate::shared::search::{contains_ignore_case, Searchable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerActivity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub date: DateTime<Utc>,
    pub rep: String,
    pub outcome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayment {
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub method: String,
    pub invoice_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub status: OrderStatus,
    pub products: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub gst_number: Option<String>,
    pub credit_limit: f64,
    pub outstanding: f64,
    pub payment_terms: String,
    pub status: CustomerStatus,
    pub last_activity: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub activities: Vec<CustomerActivity>,
    #[serde(default)]
    pub payments: Vec<CustomerPayment>,
    #[serde(default)]
    pub orders: Vec<CustomerOrder>,
}

/// Outstanding above this marks a high-value account (₹5L)
pub const HIGH_VALUE_OUTSTANDING: f64 = 500_000.0;

/// Outstanding above this highlights the row (₹2L)
pub const ATTENTION_OUTSTANDING: f64 = 200_000.0;

impl Customer {
    /// Share of the credit limit in use, rounded to whole percent
    pub fn credit_utilization(&self) -> i64 {
        if self.credit_limit == 0.0 {
            return 0;
        }
        (self.outstanding / self.credit_limit * 100.0).round() as i64
    }

    pub fn is_high_value(&self) -> bool {
        self.outstanding > HIGH_VALUE_OUTSTANDING
    }

    pub fn needs_attention(&self) -> bool {
        self.outstanding > ATTENTION_OUTSTANDING
    }
}

/// Name, contact and city are matched case-insensitively; the phone number
/// is matched as typed.
impl Searchable for Customer {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
            || contains_ignore_case(&self.contact_person, needle)
            || self.phone.contains(needle)
            || contains_ignore_case(&self.city, needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerMetrics {
    pub total_customers: usize,
    pub active_customers: usize,
    pub high_value_customers: usize,
    pub new_this_month: usize,
}
