//! Cart payload codec
//!
//! The stored payload is a JSON array of [`CartLine`] objects. Decoding
//! normalizes what it reads: zero-quantity and negative-price lines are
//! dropped and repeated ids are merged, so a decoded cart always has one line
//! per id and a non-negative total.

use crate::error::CodecError;
use crate::line::CartLine;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use storefront_catalog::ItemId;

/// Serialize lines in order
///
/// # Errors
/// Returns error if serialization fails
pub fn encode<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Result<Vec<u8>, CodecError> {
    let lines: Vec<&CartLine> = lines.into_iter().collect();
    serde_json::to_vec(&lines).map_err(CodecError::Encode)
}

/// Deserialize and normalize stored lines
///
/// # Errors
/// Returns error if the bytes are not a JSON array of cart lines
pub fn decode(bytes: &[u8]) -> Result<Vec<CartLine>, CodecError> {
    let raw: Vec<CartLine> = serde_json::from_slice(bytes).map_err(CodecError::Decode)?;
    Ok(normalize(raw))
}

pub(crate) fn normalize(raw: impl IntoIterator<Item = CartLine>) -> Vec<CartLine> {
    let mut merged: IndexMap<ItemId, CartLine> = IndexMap::new();

    for line in raw {
        if line.quantity == 0 {
            tracing::debug!(id = %line.item.id, "dropping stored line with zero quantity");
            continue;
        }
        if line.item.unit_price < Decimal::ZERO {
            tracing::debug!(id = %line.item.id, price = %line.item.unit_price, "dropping stored line with negative price");
            continue;
        }
        match merged.get_mut(line.id()) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            }
            None => {
                merged.insert(line.id().clone(), line);
            }
        }
    }

    merged.into_values().collect()
}
