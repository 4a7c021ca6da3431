//! Storefront Cart
//!
//! The cart ledger and its persistence.
//!
//! # Overview
//!
//! - **CartLedger**: one line per item id, quantities, totals, checkout
//! - **codec**: JSON payload stored under the cart key
//! - **KeyValueStore**: async byte store, with memory and file backends
//! - **PersistHandle**: background writer that keeps storage in step
//!
//! # Example
//!
//! ```rust
//! use storefront_cart::CartLedger;
//! use storefront_catalog::Item;
//! use rust_decimal::Decimal;
//!
//! let mut cart = CartLedger::new();
//! let pen = Item::new("pen", "Pen", Decimal::from(5));
//! cart.add_item(&pen);
//! cart.add_item(&pen);
//!
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.total_amount(), Decimal::from(10));
//! ```

#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod ledger;
pub mod line;
pub mod persist;
pub mod store;

// Re-exports
pub use error::{CodecError, StorageError};
pub use ledger::{CartLedger, DEFAULT_CART_KEY};
pub use line::{round_for_display, CartLine, Receipt};
pub use persist::PersistHandle;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for cart operations
    pub use crate::{CartLedger, CartLine, KeyValueStore, MemoryStore, Receipt};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
