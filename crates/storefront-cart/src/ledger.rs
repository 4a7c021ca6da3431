//! Cart ledger
//!
//! [`CartLedger`] is the single owner of the cart's lines. Lines are keyed by
//! item id and kept in first-add order. Every mutation re-encodes the whole
//! ledger and queues it for the background writer when one is attached; the
//! in-memory state stays authoritative regardless of what storage does.

use crate::codec;
use crate::error::CodecError;
use crate::line::{round_for_display, CartLine, Receipt};
use crate::persist::PersistHandle;
use crate::store::KeyValueStore;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::sync::Arc;
use storefront_catalog::{Item, ItemId};

/// Storage key used by the original screen
pub const DEFAULT_CART_KEY: &str = "cartItems";

/// Quantity-per-item state of the cart
#[derive(Debug, Default)]
pub struct CartLedger {
    lines: IndexMap<ItemId, CartLine>,
    persist: Option<PersistHandle>,
}

impl CartLedger {
    /// Create empty, unpersisted ledger
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create unpersisted ledger from lines
    ///
    /// Lines with quantity 0 or a negative price are skipped and repeated
    /// ids merged.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let lines = codec::normalize(lines)
            .into_iter()
            .map(|line| (line.id().clone(), line))
            .collect();
        Self { lines, persist: None }
    }

    /// Load ledger from `key` and persist later changes back to it
    ///
    /// Never fails: a missing key, a storage error or an undecodable payload
    /// all yield an empty ledger. Must be called inside a tokio runtime.
    pub async fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();

        let lines = match store.get(&key).await {
            Ok(Some(bytes)) => match codec::decode(&bytes) {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::warn!(key = %key, "discarding stored cart: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, "failed to read stored cart: {}", e);
                Vec::new()
            }
        };

        let mut ledger = Self::from_lines(lines);
        tracing::info!(key = %key, lines = ledger.len(), items = ledger.total_item_count(), "cart loaded");

        ledger.persist = Some(PersistHandle::spawn(store, key));
        ledger
    }

    /// Add one unit of `item`
    ///
    /// An existing line keeps its stored item fields; only the quantity grows.
    pub fn add_item(&mut self, item: &Item) {
        match self.lines.get_mut(&item.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                tracing::debug!(id = %item.id, quantity = line.quantity, "cart line incremented");
            }
            None => {
                self.lines.insert(item.id.clone(), CartLine::new(item.clone()));
                tracing::debug!(id = %item.id, "cart line added");
            }
        }
        self.persist();
    }

    /// Remove one unit of `id`, dropping the line when it reaches zero
    ///
    /// Unknown ids are ignored.
    pub fn remove_item(&mut self, id: &ItemId) {
        let Some(line) = self.lines.get_mut(id) else {
            tracing::debug!(id = %id, "remove ignored: not in cart");
            return;
        };

        line.quantity = line.quantity.saturating_sub(1);
        if line.quantity == 0 {
            self.lines.shift_remove(id);
            tracing::debug!(id = %id, "cart line removed");
        } else {
            tracing::debug!(id = %id, quantity = line.quantity, "cart line decremented");
        }
        self.persist();
    }

    /// Remove every line
    pub fn clear(&mut self) {
        self.lines.clear();
        tracing::debug!("cart cleared");
        self.persist();
    }

    /// Confirm the purchase and empty the cart
    ///
    /// Returns `None` without touching state when the cart is empty.
    /// Otherwise the receipt captures lines and totals before the clear.
    pub fn checkout(&mut self) -> Option<Receipt> {
        if self.lines.is_empty() {
            tracing::debug!("checkout ignored: cart empty");
            return None;
        }

        let receipt = Receipt {
            lines: self.lines.values().cloned().collect(),
            item_count: self.total_item_count(),
            amount: self.total_amount(),
        };
        tracing::info!(items = receipt.item_count, amount = %receipt.display_amount(), "purchase confirmed");

        self.clear();
        Some(receipt)
    }

    /// Sum of quantities
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.lines.values().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of line totals, full precision
    ///
    /// Saturates at [`Decimal::MAX`] instead of overflowing.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.lines
            .values()
            .map(CartLine::line_total)
            .try_fold(Decimal::ZERO, Decimal::checked_add)
            .unwrap_or(Decimal::MAX)
    }

    /// Total rounded to cents
    #[inline]
    #[must_use]
    pub fn display_amount(&self) -> Decimal {
        round_for_display(self.total_amount())
    }

    /// Lines in first-add order
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Line for `id`
    #[inline]
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CartLine> {
        self.lines.get(id)
    }

    /// Quantity of `id`, 0 when absent
    #[inline]
    #[must_use]
    pub fn quantity_of(&self, id: &ItemId) -> u32 {
        self.lines.get(id).map_or(0, |l| l.quantity)
    }

    /// Number of distinct lines
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether changes are being persisted
    #[inline]
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persist.is_some()
    }

    /// Encode current lines in the stored format
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        codec::encode(self.lines.values())
    }

    /// Wait for every change so far to reach storage
    pub async fn flush(&self) {
        if let Some(persist) = &self.persist {
            persist.flush().await;
        }
    }

    /// Drain pending writes and stop persisting
    pub async fn close(mut self) {
        if let Some(persist) = self.persist.take() {
            persist.close().await;
        }
    }

    fn persist(&self) {
        let Some(persist) = &self.persist else {
            return;
        };
        match self.encode() {
            Ok(payload) => persist.save(payload),
            Err(e) => tracing::warn!(key = %persist.key(), "failed to encode cart: {}", e),
        }
    }
}
