//! Storefront Catalog
//!
//! Catalog items and the view engine deriving what the catalog screen shows.
//!
//! # Overview
//!
//! - **Item**: immutable provider record
//! - **Catalog**: validated, id-unique snapshot in provider order
//! - **derive**: pure filter/search/sort functions
//! - **CatalogView**: category, keyword and sort state with the derived view
//!
//! # Example
//!
//! ```rust
//! use storefront_catalog::{Catalog, CatalogView, Item};
//! use rust_decimal::Decimal;
//!
//! let catalog = Catalog::from_items(vec![
//!     Item::new("1", "Tea", Decimal::from(4)).with_category("groceries"),
//!     Item::new("2", "Kite", Decimal::from(9)).with_category("toys"),
//! ])
//! .unwrap();
//!
//! let mut view = CatalogView::new(catalog);
//! view.set_category("toys");
//! assert_eq!(view.displayed().len(), 1);
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod derive;
pub mod error;
pub mod item;
pub mod view;

// Re-exports
pub use catalog::Catalog;
pub use derive::{derive_view, filter_by_category, search_by_name, sort_by_price, SortOrder};
pub use error::{CatalogError, CatalogResult};
pub use item::{Item, ItemId, KNOWN_CATEGORIES};
pub use view::{CatalogView, ViewPhase};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for catalog operations
    pub use crate::{Catalog, CatalogView, Item, ItemId, SortOrder, ViewPhase};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
