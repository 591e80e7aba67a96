use chrono::{DateTime, Utc};
use contracts::dashboards::d400_overview::AgingSlice;
use contracts::domain::a002_payment::{OutstandingPayment, Payment};
use contracts::enums::PaymentStatus;
use contracts::shared::aging::{calculate_aging_days, get_aging_bucket, AgingBucket};
use contracts::shared::format::{calculate_collection_rate, calculate_percentage};
use contracts::shared::search::search_list;
use serde::Serialize;

/// Overdue payments, longest overdue first, at most `limit`.
pub fn get_most_overdue_payments(payments: &[Payment], limit: usize) -> Vec<&Payment> {
    let mut overdue: Vec<&Payment> = payments.iter().filter(|p| p.is_overdue()).collect();
    overdue.sort_by(|a, b| b.aging_days.cmp(&a.aging_days));
    overdue.truncate(limit);
    overdue
}

/// Re-derives status and aging of every record against `now`.
pub fn refresh_all(payments: &mut [OutstandingPayment], now: DateTime<Utc>) {
    for payment in payments.iter_mut() {
        payment.refresh(now);
    }
}

/// Filters of the payments page. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentQuery {
    pub search: String,
    pub status: Option<PaymentStatus>,
    pub aging: Option<AgingBucket>,
}

impl PaymentQuery {
    pub fn apply<'a>(&self, payments: &'a [OutstandingPayment]) -> Vec<&'a OutstandingPayment> {
        search_list(payments, &self.search)
            .into_iter()
            .filter(|p| self.status.map_or(true, |s| p.status == s))
            .filter(|p| self.aging.map_or(true, |b| p.aging_bucket == b))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMetrics {
    pub total_outstanding: f64,
    pub customer_count: usize,
    pub overdue_amount: f64,
    pub overdue_count: usize,
    pub due_this_week: f64,
    pub due_this_week_count: usize,
    pub collection_rate: i64,
}

/// KPI cards of the payments page. `collected` is what came in this month.
pub fn payment_metrics(
    payments: &[OutstandingPayment],
    now: DateTime<Utc>,
    collected: f64,
) -> PaymentMetrics {
    let mut metrics = PaymentMetrics {
        customer_count: payments.len(),
        ..PaymentMetrics::default()
    };

    for payment in payments {
        metrics.total_outstanding += payment.amount;
        match PaymentStatus::classify(calculate_aging_days(payment.due_date, now)) {
            PaymentStatus::Overdue => {
                metrics.overdue_amount += payment.amount;
                metrics.overdue_count += 1;
            }
            PaymentStatus::DueSoon => {
                metrics.due_this_week += payment.amount;
                metrics.due_this_week_count += 1;
            }
            _ => {}
        }
    }

    metrics.collection_rate =
        calculate_collection_rate(collected, collected + metrics.total_outstanding);
    metrics
}

/// Amount past due per bucket and its share of everything past due.
pub fn aging_breakdown(payments: &[OutstandingPayment], now: DateTime<Utc>) -> Vec<AgingSlice> {
    let amounts: Vec<(AgingBucket, f64)> = AgingBucket::DUE
        .iter()
        .map(|&bucket| {
            let amount = payments
                .iter()
                .filter(|p| get_aging_bucket(p.due_date, now) == bucket)
                .map(|p| p.amount)
                .sum();
            (bucket, amount)
        })
        .collect();
    let total: f64 = amounts.iter().map(|(_, amount)| amount).sum();

    amounts
        .into_iter()
        .map(|(bucket, amount)| AgingSlice {
            bucket,
            amount,
            percentage: calculate_percentage(amount, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_payment::seed::{outstanding_payments, payments};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_get_most_overdue_payments() {
        let payments = payments(now());
        let top: Vec<&str> = get_most_overdue_payments(&payments, 4)
            .into_iter()
            .map(|p| p.customer.as_str())
            .collect();
        assert_eq!(
            top,
            vec!["LMN Enterprises", "Star Industries", "XYZ Industries Pvt Ltd", "Elite Trading Co"]
        );
        assert_eq!(get_most_overdue_payments(&payments, 100).len(), 11);
        assert!(get_most_overdue_payments(&payments, 0).is_empty());
    }

    #[test]
    fn test_payment_query() {
        let payments = outstanding_payments(now());

        let all = PaymentQuery::default().apply(&payments);
        assert_eq!(all.len(), 15);

        let by_contact = PaymentQuery { search: "MEHTA".into(), ..Default::default() };
        let found = by_contact.apply(&payments);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].customer.name, "ABC Corporation Ltd");

        let due_soon = PaymentQuery { status: Some(PaymentStatus::DueSoon), ..Default::default() };
        assert_eq!(due_soon.apply(&payments).len(), 1);

        let old = PaymentQuery {
            search: "industries".into(),
            aging: Some(AgingBucket::Days60To90),
            ..Default::default()
        };
        let names: Vec<&str> = old.apply(&payments).iter().map(|p| p.customer.name.as_str()).collect();
        assert_eq!(names, vec!["XYZ Industries Pvt Ltd", "Star Industries"]);
    }

    #[test]
    fn test_payment_metrics() {
        let payments = outstanding_payments(now());
        let metrics = payment_metrics(&payments, now(), 3_306_000.0);
        assert_eq!(metrics.total_outstanding, 3_306_000.0);
        assert_eq!(metrics.customer_count, 15);
        assert_eq!(metrics.overdue_amount, 2_291_000.0);
        assert_eq!(metrics.overdue_count, 11);
        assert_eq!(metrics.due_this_week, 340_000.0);
        assert_eq!(metrics.due_this_week_count, 1);
        assert_eq!(metrics.collection_rate, 50);
    }

    #[test]
    fn test_aging_breakdown() {
        let payments = outstanding_payments(now());
        let slices = aging_breakdown(&payments, now());
        let amounts: Vec<f64> = slices.iter().map(|s| s.amount).collect();
        assert_eq!(amounts, vec![698_000.0, 595_000.0, 548_000.0, 450_000.0]);
        let shares: Vec<i64> = slices.iter().map(|s| s.percentage).collect();
        assert_eq!(shares, vec![30, 26, 24, 20]);
    }

    #[test]
    fn test_refresh_all_moves_records_between_buckets() {
        let mut payments = outstanding_payments(now());
        refresh_all(&mut payments, now() + Duration::days(10));
        let lmn = &payments[3];
        assert_eq!(lmn.aging_days, 105);
        assert_eq!(lmn.status, PaymentStatus::Overdue);
        let supreme = &payments[4];
        assert_eq!(supreme.aging_days, 0);
        assert_eq!(supreme.status, PaymentStatus::DueSoon);
    }
}
