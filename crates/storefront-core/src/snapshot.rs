//! Output surface handed to the rendering layer

use serde::{Deserialize, Serialize};
use storefront_cart::CartLine;
use storefront_catalog::{Item, SortOrder};

/// Everything the screen needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSnapshot {
    /// Catalog items currently shown
    pub displayed_items: Vec<Item>,
    /// Cart lines in first-add order
    pub cart_lines: Vec<CartLine>,
    /// Sum of cart quantities
    pub total_item_count: u64,
    /// Cart total with two decimals
    pub total_amount: String,
    /// Purchase confirmation dialog visible
    pub checkout_confirmed: bool,
    /// Cart shown instead of the catalog
    pub show_cart: bool,
    /// "Clear filters" button visible
    pub show_clear_filters: bool,
    /// Selected category, empty when none
    pub selected_category: String,
    /// Search keyword, empty when none
    pub search_keyword: String,
    /// Direction the next sort tap applies
    pub sort_order: SortOrder,
}
