use chrono::{DateTime, Duration, Utc};
use contracts::domain::a006_sales_rep::{CompanyStats, SalesRep};

/// Names of the field team; generators pick reps from this list.
pub const SALES_REP_NAMES: &[&str] = &[
    "Rahul Sharma",
    "Priya Patel",
    "Amit Kumar",
    "Sneha Reddy",
    "Vikram Singh",
    "Anjali Desai",
    "Rajesh Gupta",
    "Kavita Menon",
];

// (activities, actual, conversion, minutes since last active)
const REP_STATS: &[(u32, u32, u32, i64)] = &[
    (45, 38, 42, 15),
    (52, 42, 38, 120),
    (38, 30, 35, 240),
    (41, 35, 40, 45),
    (35, 28, 32, 360),
    (48, 40, 36, 30),
    (43, 36, 34, 180),
    (39, 32, 31, 60),
];

const MONTHLY_TARGET: u32 = 50;

pub fn sales_reps(now: DateTime<Utc>) -> Vec<SalesRep> {
    SALES_REP_NAMES
        .iter()
        .zip(REP_STATS)
        .enumerate()
        .map(|(i, (name, &(activities, actual, conversion, idle_minutes)))| SalesRep {
            id: (i + 1).to_string(),
            name: name.to_string(),
            avatar: None,
            initials: SalesRep::initials_of(name),
            activities,
            target: MONTHLY_TARGET,
            actual,
            conversion,
            last_active: now - Duration::minutes(idle_minutes),
        })
        .collect()
}

/// Headline numbers of the overview cards
pub fn company_stats() -> CompanyStats {
    CompanyStats {
        total_outstanding: 1_250_000.0,
        overdue_payments: 420_000.0,
        activities_today: 47,
        activities_this_week: 203,
        conversion_rate: 34,
        total_customers: 156,
        active_sales_reps: SALES_REP_NAMES.len() as u32,
    }
}
