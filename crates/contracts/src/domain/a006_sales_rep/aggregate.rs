use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRep {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub initials: String,
    pub activities: u32,
    pub target: u32,
    pub actual: u32,
    /// Conversion rate, whole percent
    pub conversion: u32,
    pub last_active: DateTime<Utc>,
}

impl SalesRep {
    /// Two-letter initials from the first and last name
    pub fn initials_of(name: &str) -> String {
        let mut parts = name.split_whitespace();
        let first = parts.next().and_then(|p| p.chars().next());
        let last = parts.last().and_then(|p| p.chars().next());
        first.into_iter().chain(last).flat_map(char::to_uppercase).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub total_outstanding: f64,
    pub overdue_payments: f64,
    pub activities_today: u32,
    pub activities_this_week: u32,
    pub conversion_rate: u32,
    pub total_customers: u32,
    pub active_sales_reps: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_of() {
        assert_eq!(SalesRep::initials_of("Rahul Sharma"), "RS");
        assert_eq!(SalesRep::initials_of("kavita menon"), "KM");
        assert_eq!(SalesRep::initials_of("You"), "Y");
    }
}
