use chrono::{DateTime, Datelike, Duration, Utc};
use contracts::domain::a003_customer::{Customer, CustomerMetrics, CustomerStatus};
use contracts::shared::search::search_list;

/// Customers seen within this many days count as active
pub const ACTIVE_WINDOW_DAYS: i64 = 30;

/// Filters of the customers page. `None` means "all"; the city must match exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerQuery {
    pub search: String,
    pub status: Option<CustomerStatus>,
    pub city: Option<String>,
}

impl CustomerQuery {
    pub fn apply<'a>(&self, customers: &'a [Customer]) -> Vec<&'a Customer> {
        search_list(customers, &self.search)
            .into_iter()
            .filter(|c| self.status.map_or(true, |s| c.status == s))
            .filter(|c| self.city.as_deref().map_or(true, |city| c.city == city))
            .collect()
    }
}

/// Distinct cities for the city filter, alphabetical
pub fn cities(customers: &[Customer]) -> Vec<&str> {
    let mut cities: Vec<&str> = customers.iter().map(|c| c.city.as_str()).collect();
    cities.sort_unstable();
    cities.dedup();
    cities
}

pub fn customer_metrics(customers: &[Customer], now: DateTime<Utc>) -> CustomerMetrics {
    let active_since = now - Duration::days(ACTIVE_WINDOW_DAYS);
    CustomerMetrics {
        total_customers: customers.len(),
        active_customers: customers
            .iter()
            .filter(|c| c.status == CustomerStatus::Active && c.last_activity >= active_since)
            .count(),
        high_value_customers: customers.iter().filter(|c| c.is_high_value()).count(),
        new_this_month: customers
            .iter()
            .filter(|c| c.created_at.year() == now.year() && c.created_at.month() == now.month())
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_customer::seed::customers;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap()
    }

    fn names<'a>(found: &[&'a Customer]) -> Vec<&'a str> {
        found.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_customer_query() {
        let customers = customers(now());

        let by_city = CustomerQuery { search: "MUMBAI".into(), ..Default::default() };
        assert_eq!(names(&by_city.apply(&customers)), vec!["ABC Corporation Ltd", "Mumbai Fresh Mart"]);

        let by_phone = CustomerQuery { search: "98250".into(), ..Default::default() };
        assert_eq!(names(&by_phone.apply(&customers)), vec!["Patel Brothers"]);

        let inactive = CustomerQuery { status: Some(CustomerStatus::Inactive), ..Default::default() };
        assert_eq!(names(&inactive.apply(&customers)), vec!["Kumar Enterprises", "Premium Stores Ltd"]);

        let city = CustomerQuery {
            search: "shah".into(),
            city: Some("Mumbai".into()),
            ..Default::default()
        };
        assert_eq!(names(&city.apply(&customers)), vec!["Mumbai Fresh Mart"]);
    }

    #[test]
    fn test_customer_metrics() {
        let metrics = customer_metrics(&customers(now()), now());
        assert_eq!(metrics.total_customers, 9);
        assert_eq!(metrics.active_customers, 7);
        assert_eq!(metrics.high_value_customers, 2);
        assert_eq!(metrics.new_this_month, 2);
    }

    #[test]
    fn test_cities() {
        let customers = customers(now());
        let cities = cities(&customers);
        assert_eq!(cities.len(), 8);
        assert_eq!(cities[0], "Ahmedabad");
    }
}
