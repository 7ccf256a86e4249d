//! The cart store.

use std::sync::Arc;

use tokio::sync::watch;

use crate::cart::{apply, CartCommand, CartState};
use crate::catalog::Product;
use crate::ids::ProductId;

/// Owns the current cart snapshot and applies commands to it.
///
/// A store is valid as soon as it is constructed; hand it (or a
/// [`CartHandle`](crate::cart::CartHandle)) to whatever renders the cart.
/// Commands take `&mut self`, so there is exactly one writer. Readers get
/// `Arc<CartState>` snapshots and may [`subscribe`](Self::subscribe) to be
/// woken whenever the snapshot identity changes.
#[derive(Debug)]
pub struct CartStore {
    state: watch::Sender<Arc<CartState>>,
}

impl CartStore {
    /// Create a store holding the empty cart.
    pub fn new() -> Self {
        let (state, _) = watch::channel(Arc::new(CartState::empty()));
        Self { state }
    }

    /// Current snapshot.
    pub fn state(&self) -> Arc<CartState> {
        Arc::clone(&self.state.borrow())
    }

    /// Apply a command and return the resulting snapshot.
    ///
    /// Subscribers are only notified when the command changed something.
    pub fn dispatch(&mut self, command: CartCommand) -> Arc<CartState> {
        let current = self.state();
        let next = apply(&current, &command);
        if !Arc::ptr_eq(&current, &next) {
            self.state.send_replace(Arc::clone(&next));
        }
        next
    }

    pub fn add_to_cart(&mut self, product: Product) -> Arc<CartState> {
        self.dispatch(CartCommand::AddToCart(product))
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> Arc<CartState> {
        self.dispatch(CartCommand::RemoveFromCart(id))
    }

    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> Arc<CartState> {
        self.dispatch(CartCommand::SetQuantity { id, quantity })
    }

    pub fn clear_cart(&mut self) -> Arc<CartState> {
        self.dispatch(CartCommand::ClearCart)
    }

    /// Check whether a product has a line in the current snapshot.
    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.state.borrow().contains(id)
    }

    /// Watch the snapshot. The receiver starts with the current one marked seen.
    pub fn subscribe(&self) -> watch::Receiver<Arc<CartState>> {
        self.state.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
