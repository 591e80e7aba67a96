//! Static analytics tables.

use contracts::dashboards::d401_analytics::{
    AnalyticsMetrics, CategoryRevenue, CityRevenue, LeaderboardEntry, PaymentStatusShare,
    TopCustomer,
};
use contracts::domain::a006_sales_rep::SalesRep;

pub const METRICS: AnalyticsMetrics = AnalyticsMetrics {
    total_revenue: 4_520_000.0,
    collection_rate: 78,
    active_customers: 142,
    avg_order_value: 32_450.0,
    team_productivity: 87,
    customer_retention: 92,
};

const CATEGORY_REVENUE: &[(&str, f64, i32)] = &[
    ("Beverages", 1_250_000.0, 12),
    ("Snacks", 980_000.0, 8),
    ("Personal Care", 850_000.0, 15),
    ("Dairy Products", 680_000.0, -3),
    ("Household Items", 520_000.0, 5),
    ("Packaged Foods", 420_000.0, 18),
    ("Confectionery", 380_000.0, 7),
    ("Health & Wellness", 280_000.0, 22),
];

const PAYMENT_STATUS: &[(&str, u32, f64, &str)] = &[
    ("Paid", 78, 3_525_600.0, "#10B981"),
    ("Pending", 15, 678_000.0, "#F59E0B"),
    ("Overdue", 7, 316_400.0, "#EF4444"),
];

const TOP_CUSTOMERS: &[(&str, f64, u32)] = &[
    ("ABC Corporation Ltd", 450_000.0, 45),
    ("Premium Stores Ltd", 385_000.0, 38),
    ("City Mart Retail", 340_000.0, 42),
    ("Metro Retail Chain", 295_000.0, 35),
    ("Modern Trade Co", 268_000.0, 31),
    ("Royal Supermarket", 245_000.0, 28),
    ("Kumar Enterprises", 220_000.0, 26),
    ("Sharma General Store", 198_000.0, 24),
    ("Golden Traders", 175_000.0, 22),
    ("Patel Brothers", 152_000.0, 19),
];

const LEADERBOARD: &[(&str, f64, u32, u32)] = &[
    ("Rahul Sharma", 892_000.0, 156, 68),
    ("Priya Patel", 845_000.0, 148, 65),
    ("Vikram Singh", 798_000.0, 142, 62),
    ("Anjali Desai", 756_000.0, 138, 64),
    ("Sneha Reddy", 689_000.0, 125, 59),
];

const GEOGRAPHIC: &[(&str, f64, u32)] = &[
    ("Mumbai", 1_250_000.0, 45),
    ("Delhi", 980_000.0, 38),
    ("Bangalore", 850_000.0, 32),
    ("Pune", 520_000.0, 24),
    ("Hyderabad", 480_000.0, 22),
    ("Chennai", 440_000.0, 18),
];

pub fn category_revenue() -> Vec<CategoryRevenue> {
    CATEGORY_REVENUE
        .iter()
        .map(|&(category, revenue, growth)| CategoryRevenue {
            category: category.to_string(),
            revenue,
            growth,
        })
        .collect()
}

pub fn payment_status() -> Vec<PaymentStatusShare> {
    PAYMENT_STATUS
        .iter()
        .map(|&(status, value, amount, color)| PaymentStatusShare {
            status: status.to_string(),
            value,
            amount,
            color: color.to_string(),
        })
        .collect()
}

pub fn top_customers() -> Vec<TopCustomer> {
    TOP_CUSTOMERS
        .iter()
        .map(|&(name, revenue, orders)| TopCustomer {
            name: name.to_string(),
            revenue,
            orders,
        })
        .collect()
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    LEADERBOARD
        .iter()
        .map(|&(name, revenue, activities, conversion)| LeaderboardEntry {
            name: name.to_string(),
            initials: SalesRep::initials_of(name),
            revenue,
            activities,
            conversion,
        })
        .collect()
}

pub fn geographic() -> Vec<CityRevenue> {
    GEOGRAPHIC
        .iter()
        .map(|&(city, revenue, customers)| CityRevenue {
            city: city.to_string(),
            revenue,
            customers,
        })
        .collect()
}
