//! Validated catalog snapshot
//!
//! [`Catalog`] is the read-only provider data for one session. It keeps the
//! provider's original order, which the view engine restores from when
//! filters are cleared.

use crate::error::{CatalogError, CatalogResult};
use crate::item::{Item, ItemId};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Immutable, id-unique list of items in provider order
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[Item]>,
    index: Arc<HashMap<ItemId, usize>>,
}

impl Catalog {
    /// Build catalog from provider records
    ///
    /// # Errors
    /// Returns error if two records share an id or a price is negative
    pub fn from_items(items: Vec<Item>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(items.len());

        for (pos, item) in items.iter().enumerate() {
            if item.unit_price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    id: item.id.clone(),
                    price: item.unit_price,
                });
            }
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        tracing::debug!(items = items.len(), "catalog loaded");

        Ok(Self {
            items: items.into(),
            index: Arc::new(index),
        })
    }

    /// Parse provider JSON (an array of item records)
    ///
    /// # Errors
    /// Returns error on malformed JSON or invalid records
    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        let items: Vec<Item> = serde_json::from_str(raw)?;
        Self::from_items(items)
    }

    /// Items in provider order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lookup item by id
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Distinct non-empty categories, first-seen order
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|c| !c.is_empty() && seen.insert(*c))
            .collect()
    }
}
