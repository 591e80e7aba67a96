use chrono::{DateTime, Utc};
use contracts::domain::a004_product::{Product, ProductId, ProductVariant};
use contracts::shared::form::{parse_amount, require, FormError};

/// Variant row being typed in the add-product dialog
#[derive(Debug, Clone, PartialEq)]
pub struct NewVariantForm {
    pub name: String,
    pub sku: String,
    pub price: String,
    pub stock: bool,
}

impl Default for NewVariantForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            price: String::new(),
            stock: true,
        }
    }
}

impl NewVariantForm {
    pub fn into_variant(self, now: DateTime<Utc>) -> Result<ProductVariant, FormError> {
        Ok(ProductVariant {
            id: format!("v{}", now.timestamp_millis()),
            name: require("variant name", &self.name)?,
            sku: require("variant sku", &self.sku)?,
            price: parse_amount("variant price", &self.price)?,
            stock: self.stock,
            image: None,
        })
    }
}

/// Add-product dialog. At least one variant is required.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductForm {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub description: String,
    pub base_price: String,
    pub packaging: String,
    pub stock_available: bool,
    pub is_active: bool,
    pub variants: Vec<ProductVariant>,
}

impl Default for NewProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            category: String::new(),
            description: String::new(),
            base_price: String::new(),
            packaging: String::new(),
            stock_available: true,
            is_active: true,
            variants: Vec::new(),
        }
    }
}

impl NewProductForm {
    pub fn add_variant(&mut self, variant: NewVariantForm, now: DateTime<Utc>) -> Result<(), FormError> {
        let variant = variant.into_variant(now)?;
        self.variants.push(variant);
        Ok(())
    }

    pub fn remove_variant(&mut self, id: &str) {
        self.variants.retain(|v| v.id != id);
    }

    pub fn into_product(self, now: DateTime<Utc>) -> Result<Product, FormError> {
        let name = require("name", &self.name)?;
        let sku = require("sku", &self.sku)?;
        let category = require("category", &self.category)?;
        let base_price = parse_amount("base price", &self.base_price)?;
        if self.variants.is_empty() {
            return Err(FormError::Required("variants"));
        }

        Ok(Product {
            id: ProductId::new(format!("p{}", now.timestamp_millis())),
            name,
            sku,
            category,
            category_id: String::new(),
            description: self.description.trim().to_string(),
            base_price,
            packaging: self.packaging.trim().to_string(),
            stock_available: self.stock_available,
            is_active: self.is_active,
            images: Vec::new(),
            variants: self.variants,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap()
    }

    fn variant(sku: &str, price: &str) -> NewVariantForm {
        NewVariantForm {
            name: "Single".into(),
            sku: sku.into(),
            price: price.into(),
            stock: true,
        }
    }

    #[test]
    fn test_into_product() {
        let mut form = NewProductForm {
            name: "Kurkure Masala 90g".into(),
            sku: "SNK-KK-90".into(),
            category: "Snacks".into(),
            base_price: "30".into(),
            ..Default::default()
        };
        form.add_variant(variant("SNK-KK-90-1", "30"), now()).unwrap();
        form.add_variant(variant("SNK-KK-90-24", "680.50"), now() + Duration::milliseconds(1)).unwrap();

        let product = form.into_product(now()).unwrap();
        assert_eq!(product.id.as_str(), format!("p{}", now().timestamp_millis()));
        assert_eq!(product.base_price, 30.0);
        assert_eq!(product.variants.len(), 2);
        assert_eq!(product.variants[1].price, 680.5);
        assert!(product.is_active);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut form = NewProductForm {
            name: "Kurkure".into(),
            sku: "SNK-KK".into(),
            category: "Snacks".into(),
            base_price: "abc".into(),
            ..Default::default()
        };
        assert!(matches!(form.add_variant(variant("X", "free"), now()), Err(FormError::InvalidNumber { .. })));
        assert!(form.variants.is_empty());

        form.add_variant(variant("X", "10"), now()).unwrap();
        assert!(matches!(
            form.clone().into_product(now()),
            Err(FormError::InvalidNumber { field: "base price", .. })
        ));

        form.base_price = "25".into();
        let id = form.variants[0].id.clone();
        form.remove_variant(&id);
        assert_eq!(form.into_product(now()), Err(FormError::Required("variants")));
    }
}
