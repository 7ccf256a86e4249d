//! Cart commands and the transition function.
//!
//! [`apply`] is pure and total: every command on every state yields a valid
//! snapshot. Commands that change nothing hand back the same `Arc`, so
//! observers can detect changes with [`Arc::ptr_eq`].

use std::sync::Arc;

use tracing::{debug, trace};

use crate::cart::{CartLine, CartState};
use crate::catalog::Product;
use crate::ids::ProductId;

/// A requested cart mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    /// Add one unit of a product.
    AddToCart(Product),
    /// Remove a product's line entirely.
    RemoveFromCart(ProductId),
    /// Set a line's quantity; zero or below removes the line.
    SetQuantity { id: ProductId, quantity: i64 },
    /// Reset to the empty cart.
    ClearCart,
}

impl CartCommand {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartCommand::AddToCart(_) => "add_to_cart",
            CartCommand::RemoveFromCart(_) => "remove_from_cart",
            CartCommand::SetQuantity { .. } => "set_quantity",
            CartCommand::ClearCart => "clear_cart",
        }
    }
}

/// Compute the next snapshot from the current one.
pub fn apply(state: &Arc<CartState>, command: &CartCommand) -> Arc<CartState> {
    match command {
        CartCommand::AddToCart(product) => add_to_cart(state, product),
        CartCommand::RemoveFromCart(id) => remove_from_cart(state, *id),
        CartCommand::SetQuantity { id, quantity } => set_quantity(state, *id, *quantity),
        CartCommand::ClearCart => {
            debug!(lines = state.unique_items(), "cart cleared");
            Arc::new(CartState::empty())
        }
    }
}

fn add_to_cart(state: &Arc<CartState>, product: &Product) -> Arc<CartState> {
    let lines = match state.position(product.id) {
        Some(index) => {
            let mut lines = state.lines.clone();
            lines[index].quantity = lines[index].quantity.saturating_add(1);
            lines
        }
        None => {
            let mut lines = Vec::with_capacity(state.lines.len() + 1);
            lines.extend_from_slice(&state.lines);
            lines.push(CartLine::new(product.clone()));
            lines
        }
    };

    // The totals move by the price passed in, even when an existing line
    // keeps an older price for the same id.
    let next = CartState {
        lines,
        total_items: state.total_items.saturating_add(1),
        total_price: state.total_price + product.price,
    };
    debug!(
        product_id = %product.id,
        total_items = next.total_items,
        total_price = %next.total_price,
        "added to cart"
    );
    Arc::new(next)
}

fn remove_from_cart(state: &Arc<CartState>, id: ProductId) -> Arc<CartState> {
    let Some(index) = state.position(id) else {
        trace!(product_id = %id, "remove ignored, product not in cart");
        return Arc::clone(state);
    };
    let removed = &state.lines[index];

    let next = CartState {
        lines: state
            .lines
            .iter()
            .filter(|line| line.id() != id)
            .cloned()
            .collect(),
        total_items: state
            .total_items
            .saturating_sub(removed.quantity),
        total_price: state.total_price - removed.line_total(),
    };
    debug!(
        product_id = %id,
        total_items = next.total_items,
        total_price = %next.total_price,
        "removed from cart"
    );
    Arc::new(next)
}

fn set_quantity(state: &Arc<CartState>, id: ProductId, quantity: i64) -> Arc<CartState> {
    let Some(index) = state.position(id) else {
        trace!(product_id = %id, "quantity update ignored, product not in cart");
        return Arc::clone(state);
    };
    if quantity <= 0 {
        return remove_from_cart(state, id);
    }

    let new_quantity = quantity.unsigned_abs();
    let line = &state.lines[index];
    let old_quantity = line.quantity;
    if new_quantity == old_quantity {
        return Arc::clone(state);
    }

    let unit_price = line.unit_price();
    let total_price = if new_quantity > old_quantity {
        state.total_price + unit_price * (new_quantity - old_quantity)
    } else {
        state.total_price - unit_price * (old_quantity - new_quantity)
    };
    let mut lines = state.lines.clone();
    lines[index].quantity = new_quantity;

    let next = CartState {
        lines,
        total_items: state
            .total_items
            .saturating_sub(old_quantity)
            .saturating_add(new_quantity),
        total_price,
    };
    debug!(
        product_id = %id,
        quantity = new_quantity,
        total_items = next.total_items,
        total_price = %next.total_price,
        "quantity updated"
    );
    Arc::new(next)
}
