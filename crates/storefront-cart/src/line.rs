//! Cart lines and checkout receipts

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use storefront_catalog::{Item, ItemId};

/// One item in the cart with its quantity
///
/// Serializes as the item's fields plus `quantity`, the shape stored under
/// the cart key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Item as first added
    #[serde(flatten)]
    pub item: Item,
    /// Units in the cart, at least 1 while the line exists
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl CartLine {
    /// New line with a single unit
    #[inline]
    #[must_use]
    pub fn new(item: Item) -> Self {
        Self { item, quantity: 1 }
    }

    /// Item id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.item.id
    }

    /// Unit price times quantity, full precision
    ///
    /// Saturates at [`Decimal::MAX`] instead of overflowing.
    #[inline]
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.item
            .unit_price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

/// Round an amount to cents for display
#[inline]
#[must_use]
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Snapshot of a confirmed purchase, taken before the cart is cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Lines purchased, in cart order
    pub lines: Vec<CartLine>,
    /// Sum of quantities
    pub item_count: u64,
    /// Exact total
    pub amount: Decimal,
}

impl Receipt {
    /// Total rounded to cents
    #[inline]
    #[must_use]
    pub fn display_amount(&self) -> Decimal {
        round_for_display(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn line_total_multiplies_quantity() {
        let mut line = CartLine::new(Item::new("a", "Pen", dec!(1.25)));
        line.quantity = 3;
        assert_eq!(line.line_total(), dec!(3.75));
    }

    #[test]
    fn display_rounding_keeps_two_places() {
        assert_eq!(round_for_display(dec!(10.005)), dec!(10.01));
        assert_eq!(round_for_display(dec!(3.3333)), dec!(3.33));
    }

    #[test]
    fn missing_quantity_defaults_to_one() {
        let raw = r#"{"id":"a","productName":"Pen","unitPrice":2}"#;
        let line: CartLine = serde_json::from_str(raw).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.item.unit_price, dec!(2));
    }
}
