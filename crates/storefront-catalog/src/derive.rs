//! Pure view derivation
//!
//! These functions compute what the catalog screen shows from the base item
//! list and the current filter settings. They never touch view state, so
//! each rule can be exercised on its own.
//!
//! # Precedence
//! A non-empty keyword searches the whole base list and ignores any active
//! category. Search and category do not compose: the most recent search
//! replaces the category-filtered set as the basis of the view.

use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the next price sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Cheapest first
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Most expensive first
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// The opposite direction
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("asc"),
            Self::Descending => f.write_str("desc"),
        }
    }
}

/// Items whose category equals `category`; all items when it is empty
#[must_use]
pub fn filter_by_category(items: &[Item], category: &str) -> Vec<Item> {
    if category.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.category == category)
        .cloned()
        .collect()
}

/// Items whose name contains `keyword`, ignoring case; all items when it is empty
#[must_use]
pub fn search_by_name(items: &[Item], keyword: &str) -> Vec<Item> {
    if keyword.is_empty() {
        return items.to_vec();
    }
    let needle = keyword.to_lowercase();
    items
        .iter()
        .filter(|item| item.product_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Displayed items for the given settings
///
/// Keyword wins over category, see the module docs. With `sort` set the
/// result is stably sorted by price; `None` keeps the order of `items`.
/// [`CatalogView`](crate::CatalogView) passes the sort only for a sort tap,
/// so a sort of a filtered or searched subset is dropped when the filters
/// change and the subset is derived again.
#[must_use]
pub fn derive_view(items: &[Item], category: &str, keyword: &str, sort: Option<SortOrder>) -> Vec<Item> {
    let mut view = if keyword.is_empty() {
        filter_by_category(items, category)
    } else {
        search_by_name(items, keyword)
    };
    if let Some(order) = sort {
        sort_by_price(&mut view, order);
    }
    view
}

/// Stable in-place sort by unit price
pub fn sort_by_price(items: &mut [Item], order: SortOrder) {
    match order {
        SortOrder::Ascending => items.sort_by(|a, b| a.unit_price.cmp(&b.unit_price)),
        SortOrder::Descending => items.sort_by(|a, b| b.unit_price.cmp(&a.unit_price)),
    }
}
