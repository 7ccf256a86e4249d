//! Product type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product can display.
pub const MAX_RATING: f32 = 5.0;

/// A product in the catalog.
///
/// Immutable from the cart's point of view: adding a product to the cart
/// copies it into the line, which snapshots its price at that moment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Selling price.
    pub price: Money,
    /// Price before discount, present only for discounted products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Image reference (URL).
    #[serde(default)]
    pub image: String,
    /// Description shown on listing cards.
    #[serde(default)]
    pub description: String,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f32,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub reviews: u32,
}

impl Product {
    /// Create a product with only the fields the cart cares about.
    pub fn new(id: u64, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            original_price: None,
            image: String::new(),
            description: String::new(),
            rating: 0.0,
            reviews: 0,
        }
    }

    /// Set the pre-discount price.
    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Check if this product is on sale (original price above price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }

    /// Discount as a whole percentage of the original price, rounded.
    pub fn discount_percentage(&self) -> Option<u32> {
        let original = self.original_price?;
        if !self.is_on_sale() || original.amount() <= 0 {
            return None;
        }
        let savings = (original - self.price).amount() as f64;
        Some(((savings / original.amount() as f64) * 100.0).round() as u32)
    }

    /// Amount saved per unit against the original price.
    pub fn savings(&self) -> Money {
        match self.original_price {
            Some(original) if original > self.price => original - self.price,
            _ => Money::ZERO,
        }
    }

    /// Number of fully filled rating stars.
    pub fn full_stars(&self) -> u32 {
        self.rating.clamp(0.0, MAX_RATING).floor() as u32
    }

    /// Check the price invariants of a catalog entry.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.price.is_negative() {
            return Err(CommerceError::InvalidPrice {
                id: self.id,
                price: self.price,
            });
        }
        if let Some(original) = self.original_price {
            if original < self.price {
                return Err(CommerceError::InvalidOriginalPrice {
                    id: self.id,
                    price: self.price,
                    original,
                });
            }
        }
        Ok(())
    }
}
