//! Catalog and shopping cart state for the ShopMall storefront.
//!
//! This crate provides the types the storefront pages are built on:
//!
//! - **Catalog**: Products and the providers that supply them
//! - **Cart**: An immutable cart snapshot, the commands that transform it, a
//!   single-writer store, and a task-owned variant for concurrent writers
//! - **Money**: Integer minor-unit amounts and their display format
//!
//! # Example
//!
//! ```rust
//! use shopmall_commerce::prelude::*;
//!
//! let catalog = StaticCatalog::sample();
//! let mut cart = CartStore::new();
//!
//! let phone = catalog.get(ProductId::new(1)).cloned().unwrap();
//! cart.add_to_cart(phone.clone());
//! cart.add_to_cart(phone);
//!
//! let state = cart.state();
//! assert_eq!(state.total_items(), 2);
//! assert_eq!(state.total_price().to_string(), "NT$ 73,800");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Money, PriceFormat};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Money, PriceFormat};

    // Catalog
    pub use crate::catalog::{CatalogProvider, Product, StaticCatalog};

    // Cart
    pub use crate::cart::{
        apply, spawn_cart, CartCommand, CartHandle, CartLine, CartState, CartStore, CartSummary,
    };
}
