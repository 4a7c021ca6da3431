//! Storefront Core - screen controller
//!
//! Ties the catalog view engine and the cart ledger into one session:
//! - Routes UI events to the component that owns the affected state
//! - Loads the cart from a key-value store and keeps it persisted
//! - Produces the snapshot the rendering layer draws
//!
//! # Example
//!
//! ```rust
//! use storefront_core::{sample_catalog, Storefront, UiEvent};
//!
//! let mut shop = Storefront::in_memory(sample_catalog().unwrap());
//! shop.handle(UiEvent::CategoryTap("toys".into())).unwrap();
//! shop.handle(UiEvent::AddTap("11".into())).unwrap();
//!
//! let snapshot = shop.snapshot();
//! assert_eq!(snapshot.total_item_count, 1);
//! assert_eq!(snapshot.total_amount, "34.75");
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod event;
pub mod screen;
pub mod snapshot;

// Re-exports for convenience
pub use config::StorefrontConfig;
pub use error::{ConfigError, StorefrontError, StorefrontResult};
pub use event::UiEvent;
pub use screen::{load_catalog, sample_catalog, Storefront};
pub use snapshot::ScreenSnapshot;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the storefront
    pub use crate::{ScreenSnapshot, Storefront, StorefrontConfig, UiEvent};
    pub use storefront_cart::{CartLedger, FileStore, KeyValueStore, MemoryStore, Receipt};
    pub use storefront_catalog::{Catalog, CatalogView, Item, ItemId, SortOrder};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
