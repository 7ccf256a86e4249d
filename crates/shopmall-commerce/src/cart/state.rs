//! Cart snapshot types.

use serde::Serialize;

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;

/// One product's entry in the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    /// Product as it was when first added; its price is the line's unit price.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, always at least 1 while the line exists.
    pub quantity: u64,
}

impl CartLine {
    pub(crate) fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price captured when the line was created.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// An immutable snapshot of the cart.
///
/// Snapshots are only produced by the transition function in
/// [`apply`](crate::cart::apply); the totals are kept alongside the lines so
/// readers never have to sum them.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub(super) lines: Vec<CartLine>,
    pub(super) total_items: u64,
    pub(super) total_price: Money,
}

impl CartState {
    /// The initial empty cart.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lines in insertion order, at most one per product id.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_items(&self) -> usize {
        self.lines.len()
    }

    /// Get the line for a product.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.lines.iter().any(|line| line.id() == id)
    }

    pub(super) fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.id() == id)
    }

    /// Item count summed from the lines rather than read from the aggregate.
    pub fn recomputed_total_items(&self) -> u64 {
        self.lines
            .iter()
            .fold(0, |total: u64, line| total.saturating_add(line.quantity))
    }

    /// Price total summed from the lines rather than read from the aggregate.
    pub fn recomputed_total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Check that the stored aggregates agree with the lines.
    ///
    /// Only false after a product id was re-added with a different price:
    /// the line keeps its first price while the total moves by the new one.
    pub fn is_consistent(&self) -> bool {
        self.total_items == self.recomputed_total_items()
            && self.total_price == self.recomputed_total_price()
    }
}
