//! Catalog providers.
//!
//! The cart never fetches or validates products. A provider hands out
//! already-validated [`Product`] records to the presentation layer, which
//! passes them to the cart.

use std::collections::HashSet;
use std::path::Path;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Source of purchasable products.
pub trait CatalogProvider {
    /// All products, in listing order.
    fn products(&self) -> &[Product];

    /// Look up a product by id.
    fn get(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing if it does not exist.
    fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }
}

/// An in-memory catalog loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Build a catalog, validating prices and id uniqueness.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Load a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The built-in sample catalog of the storefront listing page.
    pub fn sample() -> Self {
        Self {
            products: sample_products(),
        }
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_product(
    id: u64,
    name: &str,
    price: i64,
    original_price: Option<i64>,
    image: &str,
    description: &str,
    rating: f32,
    reviews: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Money::new(price),
        original_price: original_price.map(Money::new),
        image: image.to_string(),
        description: description.to_string(),
        rating,
        reviews,
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        sample_product(
            1,
            "Apple iPhone 15 Pro",
            36900,
            Some(39900),
            "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400&h=300&fit=crop",
            "A17 Pro chip, titanium design and a pro camera system.",
            4.8,
            1247,
        ),
        sample_product(
            2,
            "Samsung Galaxy S24 Ultra",
            42900,
            None,
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400&h=300&fit=crop",
            "Built-in S Pen, 200MP camera and AI-assisted photography.",
            4.7,
            892,
        ),
        sample_product(
            3,
            "MacBook Pro 14\"",
            69900,
            Some(74900),
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400&h=300&fit=crop",
            "M3 Pro chip with a Liquid Retina XDR display.",
            4.9,
            634,
        ),
        sample_product(
            4,
            "Sony WH-1000XM5 Headphones",
            12900,
            None,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=300&fit=crop",
            "Noise cancelling with 30 hours of battery life.",
            4.6,
            2156,
        ),
        sample_product(
            5,
            "Nintendo Switch OLED",
            10980,
            Some(12980),
            "https://images.unsplash.com/photo-1606144042614-b2417e99c4e3?w=400&h=300&fit=crop",
            "7-inch OLED screen and 64GB of storage.",
            4.8,
            3456,
        ),
        sample_product(
            6,
            "iPad Air (5th generation)",
            18900,
            None,
            "https://images.unsplash.com/photo-1561154464-82e9adf32764?w=400&h=300&fit=crop",
            "M1 chip, 10.9-inch Liquid Retina display, Apple Pencil support.",
            4.7,
            1789,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_valid() {
        let sample = StaticCatalog::sample();
        assert_eq!(sample.len(), 6);
        let rebuilt = StaticCatalog::from_products(sample.products().to_vec()).unwrap();
        assert_eq!(rebuilt, sample);
    }

    #[test]
    fn test_lookup() {
        let catalog = StaticCatalog::sample();
        let product = catalog.get(ProductId::new(3)).unwrap();
        assert_eq!(product.price, Money::new(69900));
        assert!(catalog.get(ProductId::new(99)).is_none());
        assert!(matches!(
            catalog.require(ProductId::new(99)),
            Err(CommerceError::ProductNotFound(id)) if id == ProductId::new(99)
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let products = vec![
            Product::new(1, "A", Money::new(10)),
            Product::new(1, "B", Money::new(20)),
        ];
        assert!(matches!(
            StaticCatalog::from_products(products),
            Err(CommerceError::DuplicateProduct(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let catalog = StaticCatalog::from_json(
            r#"[{"id": 10, "name": "Cable", "price": 290},
                {"id": 11, "name": "Charger", "price": 590, "originalPrice": 790}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(ProductId::new(11)).unwrap().is_on_sale());
    }

    #[test]
    fn test_from_json_rejects_bad_prices() {
        let result = StaticCatalog::from_json(
            r#"[{"id": 1, "name": "Odd", "price": 500, "originalPrice": 100}]"#,
        );
        assert!(matches!(
            result,
            Err(CommerceError::InvalidOriginalPrice { .. })
        ));

        let result = StaticCatalog::from_json("not json");
        assert!(matches!(result, Err(CommerceError::Serialization(_))));
    }
}
