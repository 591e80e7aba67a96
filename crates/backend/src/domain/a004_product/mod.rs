pub mod form;
pub mod repository;
pub mod seed;
pub mod service;

pub use form::{NewProductForm, NewVariantForm};
pub use repository::CatalogRepository;
pub use service::{catalog_metrics, CatalogMetrics, ProductQuery, StockFilter};
