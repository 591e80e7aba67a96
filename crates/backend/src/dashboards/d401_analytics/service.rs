use chrono::{DateTime, Duration, Utc};
use contracts::dashboards::d401_analytics::{AnalyticsResponse, RevenueTrendPoint};
use rand::Rng;

use super::data;

pub const TREND_DAYS: i64 = 30;

/// Daily revenue for the last `TREND_DAYS` days, oldest first.
///
/// current ∈ [120000, 200000), previous ∈ [100000, 170000).
pub fn revenue_trend<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<RevenueTrendPoint> {
    (0..TREND_DAYS)
        .map(|i| {
            let day = now - Duration::days(TREND_DAYS - 1 - i);
            RevenueTrendPoint {
                day: day.format("%-d %b").to_string(),
                current: 120_000.0 + rng.gen::<f64>() * 80_000.0,
                previous: 100_000.0 + rng.gen::<f64>() * 70_000.0,
            }
        })
        .collect()
}

pub fn get_analytics<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> AnalyticsResponse {
    AnalyticsResponse {
        metrics: data::METRICS,
        revenue_trend: revenue_trend(rng, now),
        category_revenue: data::category_revenue(),
        payment_status: data::payment_status(),
        top_customers: data::top_customers(),
        leaderboard: data::leaderboard(),
        geographic: data::geographic(),
    }
}
