//! A cart owned by its own task.
//!
//! When more than one writer needs the cart (several sessions, request
//! handlers), a single task owns the [`CartStore`] and applies commands from
//! a queue in arrival order. Handles are cheap to clone.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::debug;

use crate::cart::{CartCommand, CartState, CartStore};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

enum Message {
    Command {
        command: CartCommand,
        reply: oneshot::Sender<Arc<CartState>>,
    },
    Close,
}

/// Handle to a cart task started with [`spawn_cart`].
#[derive(Debug, Clone)]
pub struct CartHandle {
    messages: mpsc::UnboundedSender<Message>,
    snapshots: watch::Receiver<Arc<CartState>>,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::Command { command, .. } => f.debug_tuple("Command").field(command).finish(),
            Message::Close => f.write_str("Close"),
        }
    }
}

/// Move a store into a new task and return a handle to it.
///
/// Must be called from within a tokio runtime. The task stops when every
/// handle is dropped or [`CartHandle::close`] is called.
pub fn spawn_cart(store: CartStore) -> CartHandle {
    let (messages, mut inbox) = mpsc::unbounded_channel();
    let snapshots = store.subscribe();

    tokio::spawn(async move {
        let mut store = store;
        while let Some(message) = inbox.recv().await {
            match message {
                Message::Command { command, reply } => {
                    let name = command.name();
                    let snapshot = store.dispatch(command);
                    if reply.send(snapshot).is_err() {
                        debug!(command = name, "caller went away before the reply");
                    }
                }
                Message::Close => break,
            }
        }
        debug!("cart task stopped");
    });

    CartHandle {
        messages,
        snapshots,
    }
}

impl CartHandle {
    /// Queue a command and wait for the snapshot it produced.
    pub async fn dispatch(&self, command: CartCommand) -> Result<Arc<CartState>, CommerceError> {
        let (reply, response) = oneshot::channel();
        self.messages
            .send(Message::Command { command, reply })
            .map_err(|_| CommerceError::CartClosed)?;
        response.await.map_err(|_| CommerceError::CartClosed)
    }

    pub async fn add_to_cart(&self, product: Product) -> Result<Arc<CartState>, CommerceError> {
        self.dispatch(CartCommand::AddToCart(product)).await
    }

    pub async fn remove_from_cart(&self, id: ProductId) -> Result<Arc<CartState>, CommerceError> {
        self.dispatch(CartCommand::RemoveFromCart(id)).await
    }

    pub async fn set_quantity(
        &self,
        id: ProductId,
        quantity: i64,
    ) -> Result<Arc<CartState>, CommerceError> {
        self.dispatch(CartCommand::SetQuantity { id, quantity })
            .await
    }

    pub async fn clear_cart(&self) -> Result<Arc<CartState>, CommerceError> {
        self.dispatch(CartCommand::ClearCart).await
    }

    /// Latest published snapshot, without a round trip to the task.
    pub fn state(&self) -> Arc<CartState> {
        Arc::clone(&self.snapshots.borrow())
    }

    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.snapshots.borrow().contains(id)
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<CartState>> {
        self.snapshots.clone()
    }

    /// Stop the task. Commands queued behind the close are dropped.
    pub fn close(&self) {
        let _ = self.messages.send(Message::Close);
    }

    pub fn is_closed(&self) -> bool {
        self.messages.is_closed()
    }
}
