//! Random activity generation.
//!
//! The random source is always passed in, so a seeded `StdRng` reproduces
//! the same records.

use chrono::{DateTime, Duration, Utc};
use contracts::domain::a001_activity::{Activity, ActivityId};
use contracts::enums::{ActivityOutcome, ActivityType};
use rand::Rng;

use crate::domain::a006_sales_rep::seed::SALES_REP_NAMES;
use crate::shared::mock::{notes_templates, CUSTOMERS, LOCATIONS};

/// Live activities are stamped within this many hours before "now"
const LIVE_WINDOW_HOURS: i64 = 8;

/// Seed records are spread over days, this many per day
const SEED_ACTIVITIES_PER_DAY: usize = 20;

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

struct DrawnFields {
    activity_type: ActivityType,
    rep: &'static str,
    customer: &'static str,
    location: String,
    notes: &'static str,
    outcome: ActivityOutcome,
}

/// Draw order matters for reproducibility: type, rep, customer, location, notes, outcome.
fn draw_fields<R: Rng + ?Sized>(rng: &mut R) -> DrawnFields {
    let activity_type = *pick(rng, &ActivityType::ALL);
    let rep = *pick(rng, SALES_REP_NAMES);
    let customer = *pick(rng, CUSTOMERS);
    let location = pick(rng, LOCATIONS).label();
    let notes = *pick(rng, notes_templates(activity_type));
    let outcome = *pick(rng, &ActivityOutcome::ALL);

    DrawnFields {
        activity_type,
        rep,
        customer,
        location,
        notes,
        outcome,
    }
}

fn build(id: ActivityId, fields: DrawnFields, timestamp: DateTime<Utc>) -> Activity {
    Activity::new(
        id,
        fields.activity_type,
        fields.customer,
        fields.rep,
        fields.outcome,
        timestamp,
        fields.notes,
        fields.location,
    )
}

/// One activity stamped within the last eight hours.
pub fn generate_random_activity<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Activity {
    let fields = draw_fields(rng);
    let hours_ago = rng.gen_range(0..LIVE_WINDOW_HOURS);
    let minutes_ago = rng.gen_range(0..60);
    let suffix = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();

    let id = ActivityId::new(format!(
        "activity-{}-{}",
        now.timestamp_millis(),
        suffix.simple()
    ));
    let timestamp = now - Duration::hours(hours_ago) - Duration::minutes(minutes_ago);

    build(id, fields, timestamp)
}

/// `count` activities with ids `activity-<i>`, about twenty per day going
/// back from `now`, newest first.
pub fn generate_activities<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<Activity> {
    let mut activities: Vec<Activity> = (0..count)
        .map(|i| {
            let days_ago = (i / SEED_ACTIVITIES_PER_DAY) as i64;
            let hours_ago = rng.gen_range(0..24);
            let minutes_ago = rng.gen_range(0..60);
            let fields = draw_fields(rng);
            let timestamp = now
                - Duration::days(days_ago)
                - Duration::hours(hours_ago)
                - Duration::minutes(minutes_ago);

            build(ActivityId::new(format!("activity-{}", i)), fields, timestamp)
        })
        .collect();

    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_random_activity_is_recent_and_drawn_from_pools() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = now();
        for _ in 0..200 {
            let a = generate_random_activity(&mut rng, now);
            assert!(a.timestamp <= now);
            assert!(now - a.timestamp < Duration::hours(LIVE_WINDOW_HOURS));
            assert!(CUSTOMERS.contains(&a.customer.as_str()));
            assert!(SALES_REP_NAMES.contains(&a.rep.as_str()));
            assert!(notes_templates(a.activity_type).contains(&a.notes.as_str()));
            assert!(LOCATIONS.iter().any(|l| l.label() == a.location));
            assert!(a.id.as_str().starts_with("activity-"));
        }
    }

    #[test]
    fn test_same_seed_same_activity() {
        let now = now();
        let a = generate_random_activity(&mut StdRng::seed_from_u64(42), now);
        let b = generate_random_activity(&mut StdRng::seed_from_u64(42), now);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_type_and_outcome_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = now();
        let batch: Vec<Activity> = (0..500).map(|_| generate_random_activity(&mut rng, now)).collect();
        for t in ActivityType::ALL {
            assert!(batch.iter().any(|a| a.activity_type == t), "{:?} never drawn", t);
        }
        for o in ActivityOutcome::ALL {
            assert!(batch.iter().any(|a| a.outcome == o), "{:?} never drawn", o);
        }
    }

    #[test]
    fn test_generate_activities_sorted_and_spread() {
        let mut rng = StdRng::seed_from_u64(3);
        let now = now();
        let activities = generate_activities(&mut rng, now, 50);
        assert_eq!(activities.len(), 50);
        assert!(activities.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

        // i / 20 days back plus at most 23h59m
        let oldest = activities.last().unwrap();
        assert!(now - oldest.timestamp < Duration::days(3));

        let mut ids: Vec<&str> = activities.iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
        assert!(activities.iter().any(|a| a.id.as_str() == "activity-49"));
    }
}
