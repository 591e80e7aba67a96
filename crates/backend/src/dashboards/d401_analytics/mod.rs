pub mod data;
pub mod service;

pub use service::{get_analytics, revenue_trend};
