use contracts::domain::a004_product::{Category, Product, ProductId};

/// Catalog state of the catalog page. New products go on top.
#[derive(Debug, Clone, Default)]
pub struct CatalogRepository {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl CatalogRepository {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self { products, categories }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn add(&mut self, product: Product) {
        self.products.insert(0, product);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_product::form::{NewProductForm, NewVariantForm};
    use crate::domain::a004_product::seed::{categories, products};
    use chrono::Utc;

    #[test]
    fn test_add_prepends() {
        let now = Utc::now();
        let seed = products(now);
        let mut repo = CatalogRepository::new(seed.clone(), categories(&seed));

        let mut form = NewProductForm {
            name: "Maaza 600ml".into(),
            sku: "BEV-MZ-600".into(),
            category: "Beverages > Juices".into(),
            base_price: "45".into(),
            ..Default::default()
        };
        form.add_variant(
            NewVariantForm {
                name: "Single".into(),
                sku: "BEV-MZ-600-1".into(),
                price: "45".into(),
                stock: true,
            },
            now,
        )
        .unwrap();
        let product = form.into_product(now).unwrap();
        let id = product.id.clone();
        repo.add(product);

        assert_eq!(repo.products().len(), seed.len() + 1);
        assert_eq!(repo.products()[0].id, id);
        assert!(repo.get_by_id(&id).is_some());
        assert_eq!(repo.categories().len(), 7);
    }
}
