use chrono::{DateTime, Duration, Utc};
use contracts::domain::a005_scheme::{
    derive_scheme_status, ProductRef, Scheme, SchemeDetails, SchemeId, SchemePerformance,
};
use contracts::enums::{DiscountType, SchemeType};

fn product(id: &str, name: &str) -> Option<ProductRef> {
    Some(ProductRef {
        id: id.to_string(),
        name: name.to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
fn scheme(
    n: u32,
    name: &str,
    scheme_type: SchemeType,
    details: SchemeDetails,
    (start_offset, end_offset): (i64, i64),
    (times_used, total_savings): (u32, f64),
    top_reps: &[&str],
    categories: &[&str],
    now: DateTime<Utc>,
) -> Scheme {
    let start_date = now + Duration::days(start_offset);
    let end_date = now + Duration::days(end_offset);
    Scheme {
        id: SchemeId::new(format!("s{}", n)),
        name: name.to_string(),
        scheme_type,
        status: derive_scheme_status(start_date, end_date, now),
        start_date,
        end_date,
        details,
        performance: SchemePerformance {
            times_used,
            total_savings,
            top_reps: top_reps.iter().map(|r| r.to_string()).collect(),
        },
        auto_apply: n % 2 == 1,
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

/// Seed schemes; statuses are derived from their dates relative to `now`.
pub fn schemes(now: DateTime<Utc>) -> Vec<Scheme> {
    vec![
        scheme(
            1,
            "Summer Cooler Offer",
            SchemeType::Quantity,
            SchemeDetails {
                product: product("p1", "Coca Cola 500ml"),
                buy_quantity: Some(10),
                free_quantity: Some(1),
                ..Default::default()
            },
            (-20, 25),
            (145, 58_000.0),
            &["Rahul Sharma", "Priya Patel"],
            &["Beverages"],
            now,
        ),
        scheme(
            2,
            "Snack Combo",
            SchemeType::CrossProduct,
            SchemeDetails {
                product: product("p2", "Pepsi 1L"),
                buy_quantity: Some(6),
                cross_product: product("p3", "Lays Classic 50g"),
                free_quantity: Some(2),
                ..Default::default()
            },
            (-10, 5),
            (89, 21_360.0),
            &["Sneha Reddy"],
            &["Beverages", "Snacks"],
            now,
        ),
        scheme(
            3,
            "Bulk Order Discount",
            SchemeType::OrderValue,
            SchemeDetails {
                min_order_value: Some(25_000.0),
                discount_type: Some(DiscountType::Percentage),
                discount_value: Some(5.0),
                ..Default::default()
            },
            (-40, 60),
            (62, 93_000.0),
            &["Amit Kumar", "Rahul Sharma"],
            &["Beverages", "Snacks", "Personal Care"],
            now,
        ),
        scheme(
            4,
            "Festive Personal Care",
            SchemeType::OrderValue,
            SchemeDetails {
                min_order_value: Some(10_000.0),
                discount_type: Some(DiscountType::Fixed),
                discount_value: Some(500.0),
                ..Default::default()
            },
            (-60, -5),
            (210, 105_000.0),
            &["Priya Patel"],
            &["Personal Care"],
            now,
        ),
        scheme(
            5,
            "Shampoo Bonanza",
            SchemeType::Quantity,
            SchemeDetails {
                product: product("p4", "Sunsilk Shampoo 360ml"),
                buy_quantity: Some(5),
                free_quantity: Some(1),
                ..Default::default()
            },
            (-3, 3),
            (34, 7_820.0),
            &["Vikram Singh"],
            &["Personal Care"],
            now,
        ),
    ]
}
