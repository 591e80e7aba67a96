use chrono::{DateTime, Datelike, Utc, Weekday};
use contracts::dashboards::d400_overview::{ActivityTrendRow, OverviewResponse, TeamPerformanceRow};
use contracts::domain::a001_activity::Activity;
use contracts::domain::a006_sales_rep::SalesRep;
use contracts::enums::ActivityType;

use crate::domain::a001_activity::seed::get_recent_activities_limit;
use crate::domain::a002_payment::seed::{outstanding_payments, payments};
use crate::domain::a002_payment::service::{aging_breakdown, get_most_overdue_payments};
use crate::domain::a006_sales_rep::seed::{company_stats, sales_reps};
use crate::domain::a006_sales_rep::service::{get_top_performers, target_achievement};

const RECENT_ACTIVITIES: usize = 5;
const PAYMENT_ALERTS: usize = 4;
const TOP_PERFORMERS: usize = 3;
const TEAM_CHART_SIZE: usize = 5;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Overview page. Trends are counted over `activities`; the rest comes from the seeds.
pub fn get_overview(activities: &[Activity], now: DateTime<Utc>) -> OverviewResponse {
    let reps = sales_reps(now);
    let alerts = payments(now);
    let receivables = outstanding_payments(now);

    OverviewResponse {
        company_stats: company_stats(),
        recent_activities: get_recent_activities_limit(now, RECENT_ACTIVITIES),
        payment_alerts: get_most_overdue_payments(&alerts, PAYMENT_ALERTS)
            .into_iter()
            .cloned()
            .collect(),
        top_performers: get_top_performers(&reps, TOP_PERFORMERS)
            .into_iter()
            .cloned()
            .collect(),
        team_performance: team_performance(&reps, TEAM_CHART_SIZE),
        activity_trends: activity_trends(activities),
        payment_aging: aging_breakdown(&receivables, now),
    }
}

/// Reps with the most closed activities, with their target achievement
pub fn team_performance(reps: &[SalesRep], limit: usize) -> Vec<TeamPerformanceRow> {
    let mut sorted: Vec<&SalesRep> = reps.iter().collect();
    sorted.sort_by(|a, b| b.actual.cmp(&a.actual));
    sorted
        .into_iter()
        .take(limit)
        .map(|rep| TeamPerformanceRow {
            name: rep.name.clone(),
            initials: rep.initials.clone(),
            actual: rep.actual,
            target: rep.target,
            percentage: target_achievement(rep),
        })
        .collect()
}

/// Activities per weekday and type, Monday first
pub fn activity_trends(activities: &[Activity]) -> Vec<ActivityTrendRow> {
    WEEK.iter()
        .map(|&weekday| {
            let mut row = ActivityTrendRow {
                day: format!("{:?}", weekday),
                calls: 0,
                visits: 0,
                meetings: 0,
                emails: 0,
            };
            for activity in activities.iter().filter(|a| a.timestamp.weekday() == weekday) {
                match activity.activity_type {
                    ActivityType::Call => row.calls += 1,
                    ActivityType::Visit => row.visits += 1,
                    ActivityType::Meeting => row.meetings += 1,
                    ActivityType::Email => row.emails += 1,
                }
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_activity::generator::generate_activities;
    use chrono::TimeZone;
    use contracts::domain::a001_activity::ActivityId;
    use contracts::enums::ActivityOutcome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(day: u32, activity_type: ActivityType) -> Activity {
        Activity::new(
            ActivityId::new(format!("t{}", day)),
            activity_type,
            "City Wholesalers",
            "Amit Kumar",
            ActivityOutcome::Interested,
            Utc.with_ymd_and_hms(2024, 3, day, 11, 0, 0).unwrap(),
            "",
            "Koramangala, Bangalore",
        )
    }

    #[test]
    fn test_activity_trends() {
        // 11 March 2024 is a Monday
        let activities = vec![
            at(11, ActivityType::Call),
            at(11, ActivityType::Call),
            at(11, ActivityType::Email),
            at(15, ActivityType::Visit),
            at(17, ActivityType::Meeting),
        ];
        let trends = activity_trends(&activities);
        let days: Vec<&str> = trends.iter().map(|r| r.day.as_str()).collect();
        assert_eq!(days, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!((trends[0].calls, trends[0].emails), (2, 1));
        assert_eq!(trends[4].visits, 1);
        assert_eq!(trends[6].meetings, 1);
        assert_eq!(trends[1].total(), 0);
    }

    #[test]
    fn test_overview() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let activities = generate_activities(&mut StdRng::seed_from_u64(11), now, 50);
        let overview = get_overview(&activities, now);

        assert_eq!(overview.company_stats.active_sales_reps, 8);
        assert_eq!(overview.recent_activities.len(), 5);
        assert_eq!(overview.payment_alerts.len(), 4);
        assert_eq!(overview.payment_alerts[0].customer, "LMN Enterprises");
        assert_eq!(overview.top_performers[0].name, "Rahul Sharma");

        let team: Vec<(&str, i64)> = overview
            .team_performance
            .iter()
            .map(|r| (r.name.as_str(), r.percentage))
            .collect();
        assert_eq!(
            team,
            vec![
                ("Priya Patel", 84),
                ("Anjali Desai", 80),
                ("Rahul Sharma", 76),
                ("Rajesh Gupta", 72),
                ("Sneha Reddy", 70),
            ]
        );

        let counted: u32 = overview.activity_trends.iter().map(|r| r.total()).sum();
        assert_eq!(counted, 50);
        assert_eq!(overview.payment_aging.len(), 4);
    }
}
