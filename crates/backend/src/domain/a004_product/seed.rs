use chrono::{DateTime, Duration, Utc};
use contracts::domain::a004_product::{Category, Product, ProductId, ProductVariant};

/// (id, name, parent, level)
const CATEGORY_TABLE: &[(&str, &str, Option<&str>, u32)] = &[
    ("cat1", "Beverages", None, 0),
    ("cat2", "Soft Drinks", Some("cat1"), 1),
    ("cat3", "Juices", Some("cat1"), 1),
    ("cat4", "Snacks", None, 0),
    ("cat5", "Personal Care", None, 0),
    ("cat6", "Hair Care", Some("cat5"), 1),
    ("cat7", "Bath & Body", Some("cat5"), 1),
];

struct Row {
    name: &'static str,
    sku: &'static str,
    category: &'static str,
    category_id: &'static str,
    description: &'static str,
    base_price: f64,
    packaging: &'static str,
    stock_available: bool,
    is_active: bool,
    variants: &'static [(&'static str, &'static str, f64, bool)],
}

const PRODUCT_TABLE: &[Row] = &[
    Row {
        name: "Coca Cola 500ml",
        sku: "BEV-CC-500",
        category: "Beverages > Soft Drinks",
        category_id: "cat2",
        description: "Carbonated soft drink, PET bottle",
        base_price: 40.0,
        packaging: "Case of 24",
        stock_available: true,
        is_active: true,
        variants: &[("Single", "BEV-CC-500-1", 40.0, true), ("Case of 24", "BEV-CC-500-24", 900.0, true)],
    },
    Row {
        name: "Pepsi 1L",
        sku: "BEV-PP-1000",
        category: "Beverages > Soft Drinks",
        category_id: "cat2",
        description: "Carbonated soft drink, family pack",
        base_price: 65.0,
        packaging: "Case of 12",
        stock_available: true,
        is_active: true,
        variants: &[("Single", "BEV-PP-1000-1", 65.0, true), ("Case of 12", "BEV-PP-1000-12", 720.0, false)],
    },
    Row {
        name: "Tropicana Orange 1L",
        sku: "BEV-TR-OR-1000",
        category: "Beverages > Juices",
        category_id: "cat3",
        description: "100% orange juice, tetra pack",
        base_price: 120.0,
        packaging: "Case of 12",
        stock_available: false,
        is_active: true,
        variants: &[("Single", "BEV-TR-OR-1000-1", 120.0, false)],
    },
    Row {
        name: "Lays Classic 50g",
        sku: "SNK-LY-CL-50",
        category: "Snacks",
        category_id: "cat4",
        description: "Salted potato chips",
        base_price: 20.0,
        packaging: "Carton of 48",
        stock_available: true,
        is_active: true,
        variants: &[("Single", "SNK-LY-CL-50-1", 20.0, true), ("Carton of 48", "SNK-LY-CL-50-48", 900.0, true)],
    },
    Row {
        name: "Sunsilk Shampoo 360ml",
        sku: "PC-SS-360",
        category: "Personal Care > Hair Care",
        category_id: "cat6",
        description: "Black shine shampoo",
        base_price: 230.0,
        packaging: "Box of 6",
        stock_available: true,
        is_active: true,
        variants: &[("360ml", "PC-SS-360-1", 230.0, true), ("180ml", "PC-SS-180-1", 125.0, true)],
    },
    Row {
        name: "Dettol Soap 75g",
        sku: "PC-DT-75",
        category: "Personal Care > Bath & Body",
        category_id: "cat7",
        description: "Antiseptic bathing bar",
        base_price: 45.0,
        packaging: "Pack of 4",
        stock_available: true,
        is_active: false,
        variants: &[("Pack of 4", "PC-DT-75-4", 170.0, true)],
    },
];

pub fn products(now: DateTime<Utc>) -> Vec<Product> {
    PRODUCT_TABLE
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let n = i + 1;
            let created_at = now - Duration::days(180 - n as i64 * 20);
            Product {
                id: ProductId::new(format!("p{}", n)),
                name: row.name.to_string(),
                sku: row.sku.to_string(),
                category: row.category.to_string(),
                category_id: row.category_id.to_string(),
                description: row.description.to_string(),
                base_price: row.base_price,
                packaging: row.packaging.to_string(),
                stock_available: row.stock_available,
                is_active: row.is_active,
                images: Vec::new(),
                variants: row
                    .variants
                    .iter()
                    .enumerate()
                    .map(|(k, &(name, sku, price, stock))| ProductVariant {
                        id: format!("v{}-{}", n, k + 1),
                        name: name.to_string(),
                        sku: sku.to_string(),
                        price,
                        stock,
                        image: None,
                    })
                    .collect(),
                created_at,
                updated_at: created_at + Duration::days(10),
            }
        })
        .collect()
}

/// Categories with product counts taken from `products`
pub fn categories(products: &[Product]) -> Vec<Category> {
    CATEGORY_TABLE
        .iter()
        .map(|&(id, name, parent_id, level)| {
            let product_count = products
                .iter()
                .filter(|p| p.category_id == id || p.category.split(" > ").next() == Some(name))
                .count() as u32;
            Category {
                id: id.to_string(),
                name: name.to_string(),
                parent_id: parent_id.map(str::to_string),
                level,
                product_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_count_products() {
        let products = products(Utc::now());
        let categories = categories(&products);
        let count = |name: &str| categories.iter().find(|c| c.name == name).map(|c| c.product_count);
        assert_eq!(count("Beverages"), Some(3));
        assert_eq!(count("Soft Drinks"), Some(2));
        assert_eq!(count("Snacks"), Some(1));
        assert_eq!(count("Hair Care"), Some(1));
    }
}
