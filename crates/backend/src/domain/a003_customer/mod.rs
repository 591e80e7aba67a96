pub mod repository;
pub mod seed;
pub mod service;

pub use repository::CustomerRepository;
pub use service::{cities, customer_metrics, CustomerQuery};
