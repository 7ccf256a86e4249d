//! Order summary for the cart page.

use serde::Serialize;

use crate::cart::CartState;
use crate::money::Money;

/// Totals shown next to the cart lines.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Number of units in the cart.
    pub total_items: u64,
    /// The cart's price total.
    pub subtotal: Money,
    /// Shipping cost. Shipping is free.
    pub shipping: Money,
    /// Amount saved against original prices.
    pub savings: Money,
    /// Subtotal plus shipping.
    pub grand_total: Money,
}

impl CartSummary {
    pub fn from_state(state: &CartState) -> Self {
        let subtotal = state.total_price();
        let shipping = Money::ZERO;
        let savings = state
            .lines()
            .iter()
            .map(|line| line.product.savings() * line.quantity)
            .sum();

        Self {
            total_items: state.total_items(),
            subtotal,
            shipping,
            savings,
            grand_total: subtotal + shipping,
        }
    }

    /// Check if any line is discounted.
    pub fn has_savings(&self) -> bool {
        self.savings > Money::ZERO
    }
}
