//! Commerce error types.
//!
//! Cart transitions are total and never fail; these errors come from the
//! catalog boundary and from talking to a stopped cart task.

use thiserror::Error;

use crate::ids::ProductId;
use crate::money::Money;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Price below zero.
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: ProductId, price: Money },

    /// Original (pre-discount) price lower than the selling price.
    #[error("Original price {original} of product {id} is below its price {price}")]
    InvalidOriginalPrice {
        id: ProductId,
        price: Money,
        original: Money,
    },

    /// The task owning the cart has stopped.
    #[error("Cart is closed")]
    CartClosed,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for CommerceError {
    fn from(e: std::io::Error) -> Self {
        CommerceError::Io(e.to_string())
    }
}
