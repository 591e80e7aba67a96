pub mod form;
pub mod repository;
pub mod seed;
pub mod service;

pub use form::{NewSchemeForm, SCHEME_PRODUCTS};
pub use repository::SchemeRepository;
pub use service::{refresh_statuses, scheme_metrics, SchemeMetrics, SchemeQuery};
