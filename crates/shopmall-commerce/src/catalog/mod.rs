//! Product catalog module.
//!
//! Contains the product type and the providers that supply it.

mod product;
mod provider;

pub use product::{Product, MAX_RATING};
pub use provider::{CatalogProvider, StaticCatalog};
