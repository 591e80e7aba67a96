pub mod aggregate;

pub use aggregate::{Category, Product, ProductId, ProductVariant};
