//! Error types for catalog loading

use crate::item::ItemId;
use rust_decimal::Decimal;

/// Errors raised while building a catalog from provider data
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two records share the same id
    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),

    /// Record carries a negative unit price
    #[error("negative unit price {price} for item {id}")]
    NegativePrice {
        /// Offending item
        id: ItemId,
        /// Price as supplied
        price: Decimal,
    },

    /// Provider payload is not a valid item array
    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
