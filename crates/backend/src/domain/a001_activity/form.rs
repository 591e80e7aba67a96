use chrono::{DateTime, NaiveTime, Utc};
use contracts::domain::a001_activity::{Activity, ActivityId};
use contracts::enums::{ActivityOutcome, ActivityType};
use contracts::shared::form::{parse_date, parse_optional_amount, require, FormError};

/// Rep name stamped on hand-logged records
pub const CURRENT_USER: &str = "You";

/// Customer choice of the log-activity form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCustomer {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
}

pub const FORM_CUSTOMERS: &[FormCustomer] = &[
    FormCustomer { id: "c1", name: "ABC Corporation Ltd", location: "Mumbai" },
    FormCustomer { id: "c2", name: "Sharma General Store", location: "Delhi" },
    FormCustomer { id: "c3", name: "City Mart Retail", location: "Bangalore" },
    FormCustomer { id: "c4", name: "Kumar Enterprises", location: "Chennai" },
    FormCustomer { id: "c5", name: "Modern Trade Co", location: "Pune" },
    FormCustomer { id: "c6", name: "Patel Brothers", location: "Ahmedabad" },
    FormCustomer { id: "c7", name: "Premium Stores Ltd", location: "Hyderabad" },
    FormCustomer { id: "c8", name: "Metro Retail Chain", location: "Kolkata" },
];

pub fn find_form_customer(id: &str) -> Option<&'static FormCustomer> {
    FORM_CUSTOMERS.iter().find(|c| c.id == id)
}

/// Raw input of the log-activity form, as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct LogActivityForm {
    pub activity_type: ActivityType,
    pub customer_id: String,
    pub outcome: String,
    pub notes: String,
    pub order_value: String,
    pub next_follow_up: String,
}

impl Default for LogActivityForm {
    fn default() -> Self {
        Self {
            activity_type: ActivityType::Call,
            customer_id: String::new(),
            outcome: String::new(),
            notes: String::new(),
            order_value: String::new(),
            next_follow_up: String::new(),
        }
    }
}

impl LogActivityForm {
    /// Save is enabled once a customer and an outcome are chosen.
    pub fn is_valid(&self) -> bool {
        !self.customer_id.trim().is_empty() && !self.outcome.trim().is_empty()
    }

    /// Builds the record to prepend to the feed, stamped at `now` by the current user.
    pub fn into_activity(self, now: DateTime<Utc>) -> Result<Activity, FormError> {
        let customer_id = require("customer", &self.customer_id)?;
        let customer = find_form_customer(&customer_id).ok_or_else(|| FormError::UnknownOption {
            field: "customer",
            value: customer_id.clone(),
        })?;

        let outcome_code = require("outcome", &self.outcome)?;
        let outcome = ActivityOutcome::from_code(&outcome_code).ok_or(FormError::UnknownOption {
            field: "outcome",
            value: outcome_code,
        })?;

        let order_value = parse_optional_amount("order value", &self.order_value)?;
        let next_follow_up = if self.next_follow_up.trim().is_empty() {
            None
        } else {
            let date = parse_date("next follow-up", &self.next_follow_up)?;
            Some(date.and_time(NaiveTime::MIN).and_utc())
        };

        let mut activity = Activity::new(
            ActivityId::new(now.timestamp_millis().to_string()),
            self.activity_type,
            customer.name,
            CURRENT_USER,
            outcome,
            now,
            self.notes,
            customer.location,
        );
        activity.order_value = order_value;
        activity.next_follow_up = next_follow_up;
        Ok(activity)
    }
}
