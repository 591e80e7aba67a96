pub mod service;

pub use service::{activity_trends, get_overview, team_performance};
