pub mod aggregate;

pub use aggregate::{
    derive_scheme_status, ProductRef, Scheme, SchemeDetails, SchemeId, SchemePerformance,
    EXPIRING_WINDOW_DAYS,
};
