pub mod aggregate;

pub use aggregate::{CompanyStats, SalesRep};
