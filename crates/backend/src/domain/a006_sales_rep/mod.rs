pub mod seed;
pub mod service;

pub use seed::{company_stats, sales_reps, SALES_REP_NAMES};
pub use service::{get_top_performers, target_achievement};
