use crate::shared::search::{contains_ignore_case, Searchable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock: bool,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    /// Category path, e.g. "Beverages > Soft Drinks"
    pub category: String,
    pub category_id: String,
    pub description: String,
    pub base_price: f64,
    pub packaging: String,
    pub stock_available: bool,
    pub is_active: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Lowest price across the base price and all variants
    pub fn starting_price(&self) -> f64 {
        self.variants
            .iter()
            .map(|v| v.price)
            .fold(self.base_price, f64::min)
    }
}

/// Catalog search covers name and SKU.
impl Searchable for Product {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle) || contains_ignore_case(&self.sku, needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub level: u32,
    pub product_count: u32,
}
