use contracts::domain::a004_product::Product;
use contracts::shared::search::search_list;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    OutOfStock,
}

impl StockFilter {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(StockFilter::All),
            "in_stock" => Some(StockFilter::InStock),
            "out_stock" => Some(StockFilter::OutOfStock),
            _ => None,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::InStock => product.stock_available,
            StockFilter::OutOfStock => !product.stock_available,
        }
    }
}

/// Filters of the catalog page.
///
/// `category` is a substring of the product's category path, so
/// "Beverages" also keeps "Beverages > Juices".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub search: String,
    pub category: Option<String>,
    pub stock: StockFilter,
}

impl ProductQuery {
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        search_list(products, &self.search)
            .into_iter()
            .filter(|p| {
                self.category
                    .as_deref()
                    .map_or(true, |category| p.category.contains(category))
            })
            .filter(|p| self.stock.matches(p))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetrics {
    pub total_products: usize,
    pub active_products: usize,
    pub total_categories: usize,
    pub total_variants: usize,
}

pub fn catalog_metrics(products: &[Product], total_categories: usize) -> CatalogMetrics {
    CatalogMetrics {
        total_products: products.len(),
        active_products: products.iter().filter(|p| p.is_active).count(),
        total_categories,
        total_variants: products.iter().map(|p| p.variants.len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_product::seed::products;
    use chrono::Utc;

    fn skus<'a>(found: &[&'a Product]) -> Vec<&'a str> {
        found.iter().map(|p| p.sku.as_str()).collect()
    }

    #[test]
    fn test_product_query() {
        let products = products(Utc::now());

        let by_sku = ProductQuery { search: "snk-".into(), ..Default::default() };
        assert_eq!(skus(&by_sku.apply(&products)), vec!["SNK-LY-CL-50"]);

        let beverages = ProductQuery { category: Some("Beverages".into()), ..Default::default() };
        assert_eq!(beverages.apply(&products).len(), 3);

        let in_stock_drinks = ProductQuery {
            category: Some("Beverages".into()),
            stock: StockFilter::InStock,
            ..Default::default()
        };
        assert_eq!(skus(&in_stock_drinks.apply(&products)), vec!["BEV-CC-500", "BEV-PP-1000"]);

        let nothing = ProductQuery { search: "biscuit".into(), ..Default::default() };
        assert!(nothing.apply(&products).is_empty());
    }

    #[test]
    fn test_catalog_metrics() {
        let metrics = catalog_metrics(&products(Utc::now()), 7);
        assert_eq!(metrics.total_products, 6);
        assert_eq!(metrics.active_products, 5);
        assert_eq!(metrics.total_variants, 10);
        assert_eq!(StockFilter::from_code("out_stock"), Some(StockFilter::OutOfStock));
    }
}
