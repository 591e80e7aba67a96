use std::sync::{Arc, Mutex};

use chrono::Utc;
use contracts::shared::aging::format_days_overdue;
use contracts::shared::format::format_currency;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sales_dashboard::dashboards::d400_overview::get_overview;
use sales_dashboard::domain::a001_activity::seed::seed_all_activities;
use sales_dashboard::domain::a001_activity::{ActivityFeed, LiveFeed, LiveFeedSettings};
use sales_dashboard::shared::assistant::get_contextual_questions;
use sales_dashboard::shared::config;
use sales_dashboard::system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    system::tracing::initialize(&config)?;

    let activities = seed_all_activities(config.seed.activity_count);
    let now = Utc::now();

    let overview = get_overview(activities, now);
    let stats = &overview.company_stats;
    tracing::info!(
        "Outstanding {}, overdue {}, {} activities today, {} customers",
        format_currency(stats.total_outstanding),
        format_currency(stats.overdue_payments),
        stats.activities_today,
        stats.total_customers
    );
    for payment in &overview.payment_alerts {
        tracing::info!(
            "Payment alert: {} {} ({})",
            payment.customer,
            format_currency(payment.amount),
            format_days_overdue(payment.aging_days)
        );
    }
    for question in get_contextual_questions("/dashboard") {
        tracing::debug!("Suggested question: {}", question);
    }

    let feed = Arc::new(Mutex::new(ActivityFeed::new(
        activities.to_vec(),
        config.live_feed.page_size,
    )));
    let mut live = LiveFeed::start(
        Arc::clone(&feed),
        LiveFeedSettings::from(&config.live_feed),
        StdRng::from_entropy(),
    );

    tracing::info!("Live feed running, press Ctrl+C to stop");
    tokio::signal::ctrl_c().await?;
    live.stop();

    let feed = feed
        .lock()
        .map_err(|e| anyhow::anyhow!("Activity feed lock poisoned: {}", e))?;
    tracing::info!("{}", feed.summary_label());
    Ok(())
}
