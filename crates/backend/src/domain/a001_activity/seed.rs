use chrono::{DateTime, Duration, Utc};
use contracts::domain::a001_activity::{Activity, ActivityId};
use contracts::enums::{ActivityOutcome, ActivityType};
use once_cell::sync::OnceCell;

use super::generator::generate_activities;

/// Size of the session feed when nothing else is configured
pub const DEFAULT_SEED_ACTIVITY_COUNT: usize = 50;

static ALL_ACTIVITIES: OnceCell<Vec<Activity>> = OnceCell::new();

/// Generates the session feed once; later calls return the cached records
/// regardless of `count`.
pub fn seed_all_activities(count: usize) -> &'static [Activity] {
    let activities = ALL_ACTIVITIES.get_or_init(|| {
        let mut rng = rand::thread_rng();
        let activities = generate_activities(&mut rng, Utc::now(), count);
        tracing::info!("Seeded activity feed with {} records", activities.len());
        activities
    });
    if activities.len() != count {
        tracing::debug!(
            "Activity feed already seeded with {} records, requested {}",
            activities.len(),
            count
        );
    }
    activities
}

/// The session feed, seeded on first use
pub fn all_activities() -> &'static [Activity] {
    seed_all_activities(DEFAULT_SEED_ACTIVITY_COUNT)
}

// (type, customer, rep, outcome, minutes ago, notes, location)
type RecentRow = (
    ActivityType,
    &'static str,
    &'static str,
    ActivityOutcome,
    i64,
    &'static str,
    &'static str,
);

const RECENT: &[RecentRow] = &[
    (ActivityType::Visit, "ABC Corporation Ltd", "Rahul Sharma", ActivityOutcome::SaleClosed, 30,
        "Closed deal for annual maintenance contract worth ₹2.5L", "Mumbai"),
    (ActivityType::Call, "XYZ Industries Pvt Ltd", "Priya Patel", ActivityOutcome::MeetingScheduled, 2 * 60,
        "Scheduled product demo for next week, interested in bulk purchase", "Delhi"),
    (ActivityType::Meeting, "PQR Traders", "Amit Kumar", ActivityOutcome::Interested, 4 * 60,
        "Discussed credit terms, positive response", "Bangalore"),
    (ActivityType::Email, "LMN Enterprises", "Sneha Reddy", ActivityOutcome::Callback, 6 * 60,
        "Sent quotation, awaiting response", "Pune"),
    (ActivityType::Visit, "Supreme Textiles", "Vikram Singh", ActivityOutcome::NotInterested, 24 * 60,
        "Currently working with competitor, will reconsider after 6 months", "Hyderabad"),
    (ActivityType::Call, "Metro Manufacturing Co", "Anjali Desai", ActivityOutcome::Interested, 24 * 60,
        "Interested in product line extension", "Mumbai"),
    (ActivityType::Meeting, "Global Tech Solutions", "Rajesh Gupta", ActivityOutcome::MeetingScheduled, 2 * 24 * 60,
        "Follow-up meeting scheduled with decision maker", "Delhi"),
    (ActivityType::Visit, "Sunshine Retailers", "Kavita Menon", ActivityOutcome::SaleClosed, 2 * 24 * 60,
        "Closed ₹1.8L order for Q1", "Bangalore"),
    (ActivityType::Call, "Royal Distributors", "Rahul Sharma", ActivityOutcome::Callback, 3 * 24 * 60,
        "Need to callback after budget approval", "Pune"),
    (ActivityType::Email, "Modern Supplies Ltd", "Priya Patel", ActivityOutcome::Interested, 3 * 24 * 60,
        "Shared product catalog and pricing", "Hyderabad"),
];

/// Hand-written activities of the overview widget, newest first
pub fn recent_activities(now: DateTime<Utc>) -> Vec<Activity> {
    RECENT
        .iter()
        .enumerate()
        .map(|(i, &(activity_type, customer, rep, outcome, minutes_ago, notes, location))| {
            Activity::new(
                ActivityId::new((i + 1).to_string()),
                activity_type,
                customer,
                rep,
                outcome,
                now - Duration::minutes(minutes_ago),
                notes,
                location,
            )
        })
        .collect()
}

/// First `limit` records of the overview widget
pub fn get_recent_activities_limit(now: DateTime<Utc>, limit: usize) -> Vec<Activity> {
    let mut activities = recent_activities(now);
    activities.truncate(limit);
    activities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_feed_is_generated_once() {
        let first = all_activities();
        let second = seed_all_activities(10);
        assert_eq!(first.len(), DEFAULT_SEED_ACTIVITY_COUNT);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_recent_activities() {
        let now = Utc::now();
        let recent = recent_activities(now);
        assert_eq!(recent.len(), 10);
        assert!(recent.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert_eq!(get_recent_activities_limit(now, 5).len(), 5);
        assert_eq!(recent[0].customer, "ABC Corporation Ltd");
    }
}
