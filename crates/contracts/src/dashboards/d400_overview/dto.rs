use crate::domain::a001_activity::Activity;
use crate::domain::a002_payment::Payment;
use crate::domain::a006_sales_rep::{CompanyStats, SalesRep};
use crate::shared::aging::AgingBucket;
use serde::{Deserialize, Serialize};

/// Everything the overview page shows, built for one moment in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub company_stats: CompanyStats,
    pub recent_activities: Vec<Activity>,
    /// Most overdue receivables, longest overdue first
    pub payment_alerts: Vec<Payment>,
    pub top_performers: Vec<SalesRep>,
    pub team_performance: Vec<TeamPerformanceRow>,
    pub activity_trends: Vec<ActivityTrendRow>,
    pub payment_aging: Vec<AgingSlice>,
}

/// One bar of the team performance chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPerformanceRow {
    pub name: String,
    pub initials: String,
    pub actual: u32,
    pub target: u32,
    /// actual / target, whole percent
    pub percentage: i64,
}

/// Activities per type for one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTrendRow {
    /// "Mon" .. "Sun"
    pub day: String,
    pub calls: u32,
    pub visits: u32,
    pub meetings: u32,
    pub emails: u32,
}

impl ActivityTrendRow {
    pub fn total(&self) -> u32 {
        self.calls + self.visits + self.meetings + self.emails
    }
}

/// One bar of the payment aging chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgingSlice {
    pub bucket: AgingBucket,
    pub amount: f64,
    /// Share of everything past due, whole percent
    pub percentage: i64,
}
