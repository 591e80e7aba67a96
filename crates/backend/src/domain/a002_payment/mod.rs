pub mod seed;
pub mod service;

pub use service::{
    aging_breakdown, get_most_overdue_payments, payment_metrics, refresh_all, PaymentMetrics,
    PaymentQuery,
};
