use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMetrics {
    pub total_revenue: f64,
    pub collection_rate: u32,
    pub active_customers: u32,
    pub avg_order_value: f64,
    pub team_productivity: u32,
    pub customer_retention: u32,
}

/// Daily revenue of the current and the previous period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTrendPoint {
    /// "5 Mar"
    pub day: String,
    pub current: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
    /// Growth against the previous period, percent, may be negative
    pub growth: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusShare {
    pub status: String,
    /// Share, whole percent
    pub value: u32,
    pub amount: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    pub name: String,
    pub revenue: f64,
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    pub initials: String,
    pub revenue: f64,
    pub activities: u32,
    pub conversion: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRevenue {
    pub city: String,
    pub revenue: f64,
    pub customers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub metrics: AnalyticsMetrics,
    pub revenue_trend: Vec<RevenueTrendPoint>,
    pub category_revenue: Vec<CategoryRevenue>,
    pub payment_status: Vec<PaymentStatusShare>,
    pub top_customers: Vec<TopCustomer>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub geographic: Vec<CityRevenue>,
}
