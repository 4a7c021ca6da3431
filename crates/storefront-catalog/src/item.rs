//! Catalog items
//!
//! An [`Item`] is an immutable record supplied by the catalog provider.
//! Field names serialize in the provider's camelCase shape so the same
//! records can be read from `items.json` and written into the cart payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories offered by the storefront's category bar
pub const KNOWN_CATEGORIES: [&str; 7] = [
    "groceries",
    "lifestyle",
    "cloths",
    "automotive",
    "gadgets",
    "furniture",
    "toys",
];

/// Unique item identifier within a catalog
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create identifier from any string-like value
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Purchasable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique id
    pub id: ItemId,
    /// Display name, matched by keyword search
    pub product_name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Price of a single unit, never negative
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Category name, empty when uncategorised
    #[serde(default)]
    pub category: String,
    /// Image location, possibly empty
    #[serde(default)]
    pub image_url: String,
}

impl Item {
    /// Create item with empty description, category and image
    #[must_use]
    pub fn new(id: impl Into<ItemId>, product_name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            id: id.into(),
            product_name: product_name.into(),
            description: String::new(),
            unit_price,
            category: String::new(),
            image_url: String::new(),
        }
    }

    /// With category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With image URL
    #[inline]
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Whether the item has an image to show
    #[inline]
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}
