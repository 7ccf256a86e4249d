//! Shopping cart module.
//!
//! Contains the cart snapshot, the commands and transition function, the
//! store that owns the current snapshot, and the order summary.

mod actor;
mod command;
mod pricing;
mod state;
mod store;

pub use actor::{spawn_cart, CartHandle};
pub use command::{apply, CartCommand};
pub use pricing::CartSummary;
pub use state::{CartLine, CartState};
pub use store::CartStore;
