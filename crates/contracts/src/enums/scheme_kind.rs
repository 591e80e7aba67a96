use serde::{Deserialize, Serialize};

/// Promotional rule kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeType {
    /// Buy X get Y free of the same product
    Quantity,
    /// Buy X of one product, get Y of another free
    CrossProduct,
    /// Discount above a minimum order value
    OrderValue,
}

impl SchemeType {
    pub fn code(&self) -> &'static str {
        match self {
            SchemeType::Quantity => "quantity",
            SchemeType::CrossProduct => "cross_product",
            SchemeType::OrderValue => "order_value",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SchemeType::Quantity => "Quantity Based",
            SchemeType::CrossProduct => "Cross Product",
            SchemeType::OrderValue => "Order Value",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeStatus {
    Active,
    Inactive,
    Expiring,
}

impl SchemeStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SchemeStatus::Active => "active",
            SchemeStatus::Inactive => "inactive",
            SchemeStatus::Expiring => "expiring",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    Fixed,
}
