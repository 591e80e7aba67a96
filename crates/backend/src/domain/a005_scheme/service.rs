use chrono::{DateTime, Utc};
use contracts::domain::a005_scheme::Scheme;
use contracts::enums::{DiscountType, SchemeStatus};
use contracts::shared::search::search_list;
use serde::Serialize;

/// Filters of the schemes page: name search and status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemeQuery {
    pub search: String,
    pub status: Option<SchemeStatus>,
}

impl SchemeQuery {
    pub fn apply<'a>(&self, schemes: &'a [Scheme]) -> Vec<&'a Scheme> {
        search_list(schemes, &self.search)
            .into_iter()
            .filter(|s| self.status.map_or(true, |status| s.status == status))
            .collect()
    }
}

pub fn refresh_statuses(schemes: &mut [Scheme], now: DateTime<Utc>) {
    for scheme in schemes.iter_mut() {
        scheme.refresh_status(now);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeMetrics {
    pub active_schemes: usize,
    pub expiring_schemes: usize,
    pub total_mentions: u32,
    /// Mean of percentage discounts, whole percent
    pub avg_discount: i64,
}

pub fn scheme_metrics(schemes: &[Scheme]) -> SchemeMetrics {
    let count = |status| schemes.iter().filter(|s| s.status == status).count();
    let discounts: Vec<f64> = schemes
        .iter()
        .filter(|s| s.details.discount_type == Some(DiscountType::Percentage))
        .filter_map(|s| s.details.discount_value)
        .collect();
    let avg_discount = if discounts.is_empty() {
        0
    } else {
        (discounts.iter().sum::<f64>() / discounts.len() as f64).round() as i64
    };

    SchemeMetrics {
        active_schemes: count(SchemeStatus::Active),
        expiring_schemes: count(SchemeStatus::Expiring),
        total_mentions: schemes.iter().map(|s| s.performance.times_used).sum(),
        avg_discount,
    }
}
