use crate::enums::{DiscountType, SchemeStatus, SchemeType};
use crate::shared::format::format_currency;
use crate::shared::search::{contains_ignore_case, Searchable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeId(pub String);

impl SchemeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: String,
    pub name: String,
}

/// Rule parameters; which fields are set depends on the scheme type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_product: Option<ProductRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemePerformance {
    pub times_used: u32,
    pub total_savings: f64,
    pub top_reps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: SchemeId,
    pub name: String,
    #[serde(rename = "type")]
    pub scheme_type: SchemeType,
    pub status: SchemeStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub details: SchemeDetails,
    pub performance: SchemePerformance,
    pub auto_apply: bool,
    pub categories: Vec<String>,
}

/// Schemes ending within this many days are "expiring"
pub const EXPIRING_WINDOW_DAYS: i64 = 7;

/// Not started yet or already ended → inactive; ending within the window → expiring.
///
/// Seeds and newly saved schemes both take their status from this, so a
/// scheme created with a future start date is stored as inactive.
pub fn derive_scheme_status(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> SchemeStatus {
    if now < start || now > end {
        return SchemeStatus::Inactive;
    }
    if (end - now).num_days() <= EXPIRING_WINDOW_DAYS {
        SchemeStatus::Expiring
    } else {
        SchemeStatus::Active
    }
}

impl Scheme {
    /// Whole days until the end date (negative once it has passed)
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.end_date - now).num_days()
    }

    pub fn refresh_status(&mut self, now: DateTime<Utc>) {
        self.status = derive_scheme_status(self.start_date, self.end_date, now);
    }

    /// One-line description shown on the scheme card
    pub fn summary(&self) -> String {
        let d = &self.details;
        let product = |p: &Option<ProductRef>| {
            p.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| "product".to_string())
        };
        match self.scheme_type {
            SchemeType::Quantity => format!(
                "Buy {} {}, get {} free",
                d.buy_quantity.unwrap_or(0),
                product(&d.product),
                d.free_quantity.unwrap_or(0)
            ),
            SchemeType::CrossProduct => format!(
                "Buy {} {}, get {} {} free",
                d.buy_quantity.unwrap_or(0),
                product(&d.product),
                d.free_quantity.unwrap_or(0),
                product(&d.cross_product)
            ),
            SchemeType::OrderValue => {
                let discount = match (d.discount_type, d.discount_value) {
                    (Some(DiscountType::Percentage), Some(v)) => format!("{}% off", v),
                    (Some(DiscountType::Fixed), Some(v)) => format!("{} off", format_currency(v)),
                    _ => "Discount".to_string(),
                };
                format!(
                    "{} on orders above {}",
                    discount,
                    format_currency(d.min_order_value.unwrap_or(0.0))
                )
            }
        }
    }
}

impl Searchable for Scheme {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_derive_scheme_status() {
        let now = now();
        let start = now - Duration::days(10);
        assert_eq!(derive_scheme_status(start, now + Duration::days(30), now), SchemeStatus::Active);
        assert_eq!(derive_scheme_status(start, now + Duration::days(7), now), SchemeStatus::Expiring);
        assert_eq!(derive_scheme_status(start, now - Duration::days(1), now), SchemeStatus::Inactive);
        assert_eq!(
            derive_scheme_status(now + Duration::days(1), now + Duration::days(30), now),
            SchemeStatus::Inactive
        );
    }

    #[test]
    fn test_summary() {
        let now = now();
        let scheme = Scheme {
            id: SchemeId::new("s1"),
            name: "Summer Special".into(),
            scheme_type: SchemeType::OrderValue,
            status: SchemeStatus::Active,
            start_date: now,
            end_date: now + Duration::days(30),
            details: SchemeDetails {
                min_order_value: Some(5_000.0),
                discount_type: Some(DiscountType::Percentage),
                discount_value: Some(10.0),
                ..Default::default()
            },
            performance: SchemePerformance::default(),
            auto_apply: true,
            categories: vec!["Beverages".into()],
        };
        assert_eq!(scheme.summary(), "10% off on orders above ₹5,000");
        assert_eq!(scheme.days_remaining(now), 30);
    }
}
