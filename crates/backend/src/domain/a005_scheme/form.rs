use chrono::{DateTime, NaiveTime, Utc};
use contracts::domain::a005_scheme::{
    derive_scheme_status, ProductRef, Scheme, SchemeDetails, SchemeId, SchemePerformance,
};
use contracts::enums::{DiscountType, SchemeType};
use contracts::shared::form::{parse_amount, parse_date, parse_quantity, require, FormError};

/// Products offered by the scheme dialog: (id, name)
pub const SCHEME_PRODUCTS: &[(&str, &str)] = &[
    ("p1", "Coca Cola 500ml"),
    ("p2", "Pepsi 1L"),
    ("p3", "Lays Classic 50g"),
    ("p4", "Sunsilk Shampoo 360ml"),
    ("p5", "Dettol Soap 75g"),
    ("p6", "Tropicana Orange 1L"),
];

pub const SCHEME_CATEGORIES: &[&str] = &["Beverages", "Snacks", "Personal Care"];

fn product_ref(field: &'static str, raw: &str) -> Result<ProductRef, FormError> {
    let id = require(field, raw)?;
    SCHEME_PRODUCTS
        .iter()
        .find(|(pid, _)| *pid == id)
        .map(|&(id, name)| ProductRef {
            id: id.to_string(),
            name: name.to_string(),
        })
        .ok_or(FormError::UnknownOption { field, value: id })
}

/// Add-scheme dialog. Only the fields of the chosen `scheme_type` are read.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchemeForm {
    pub name: String,
    pub scheme_type: SchemeType,
    pub product_id: String,
    pub buy_quantity: String,
    pub free_quantity: String,
    pub cross_product_id: String,
    pub min_order_value: String,
    pub discount_type: DiscountType,
    pub discount_value: String,
    pub start_date: String,
    pub end_date: String,
    pub auto_apply: bool,
    pub categories: Vec<String>,
}

impl Default for NewSchemeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            scheme_type: SchemeType::Quantity,
            product_id: String::new(),
            buy_quantity: String::new(),
            free_quantity: String::new(),
            cross_product_id: String::new(),
            min_order_value: String::new(),
            discount_type: DiscountType::Percentage,
            discount_value: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            auto_apply: true,
            categories: Vec::new(),
        }
    }
}

impl NewSchemeForm {
    fn details(&self) -> Result<SchemeDetails, FormError> {
        let details = match self.scheme_type {
            SchemeType::Quantity => SchemeDetails {
                product: Some(product_ref("product", &self.product_id)?),
                buy_quantity: Some(parse_quantity("buy quantity", &self.buy_quantity)?),
                free_quantity: Some(parse_quantity("free quantity", &self.free_quantity)?),
                ..Default::default()
            },
            SchemeType::CrossProduct => SchemeDetails {
                product: Some(product_ref("product", &self.product_id)?),
                buy_quantity: Some(parse_quantity("buy quantity", &self.buy_quantity)?),
                cross_product: Some(product_ref("free product", &self.cross_product_id)?),
                free_quantity: Some(parse_quantity("free quantity", &self.free_quantity)?),
                ..Default::default()
            },
            SchemeType::OrderValue => SchemeDetails {
                min_order_value: Some(parse_amount("min order value", &self.min_order_value)?),
                discount_type: Some(self.discount_type),
                discount_value: Some(parse_amount("discount value", &self.discount_value)?),
                ..Default::default()
            },
        };
        Ok(details)
    }

    /// Builds the scheme with its status derived from the dates and `now`.
    pub fn into_scheme(self, now: DateTime<Utc>) -> Result<Scheme, FormError> {
        let name = require("name", &self.name)?;
        let details = self.details()?;

        let start = parse_date("start date", &self.start_date)?;
        let end = parse_date("end date", &self.end_date)?;
        if end < start {
            return Err(FormError::InvalidDateRange { start, end });
        }
        let start_date = start.and_time(NaiveTime::MIN).and_utc();
        let end_date = end.and_time(NaiveTime::MIN).and_utc();

        Ok(Scheme {
            id: SchemeId::new(format!("s{}", now.timestamp_millis())),
            name,
            scheme_type: self.scheme_type,
            status: derive_scheme_status(start_date, end_date, now),
            start_date,
            end_date,
            details,
            performance: SchemePerformance::default(),
            auto_apply: self.auto_apply,
            categories: self.categories,
        })
    }
}
