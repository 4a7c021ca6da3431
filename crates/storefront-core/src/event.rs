//! UI events consumed by the screen controller

use serde::{Deserialize, Serialize};
use storefront_catalog::ItemId;

/// Input produced by the rendering layer
///
/// Serialized adjacently tagged, e.g. `{"event":"category_tap","value":"toys"}`
/// or `{"event":"sort_tap"}`, which is the format `replay` reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum UiEvent {
    /// Category chip tapped; empty clears the category
    CategoryTap(String),
    /// Search box text changed
    SearchChanged(String),
    /// "Sort by price" tapped
    SortTap,
    /// Add button on an item or cart line
    AddTap(ItemId),
    /// Minus button on a cart line
    RemoveTap(ItemId),
    /// "Clear cart" tapped
    ClearCartTap,
    /// "Checkout" tapped
    CheckoutTap,
    /// "Clear filters" tapped
    ClearFiltersTap,
    /// Cart icon tapped: switch between catalog and cart
    ToggleCartView,
    /// Confirmation dialog closed
    DismissConfirmation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_use_tagged_json() {
        let json = serde_json::to_string(&UiEvent::CategoryTap("toys".into())).unwrap();
        assert_eq!(json, r#"{"event":"category_tap","value":"toys"}"#);

        let parsed: Vec<UiEvent> =
            serde_json::from_str(r#"[{"event":"sort_tap"},{"event":"add_tap","value":"7"}]"#).unwrap();
        assert_eq!(parsed, vec![UiEvent::SortTap, UiEvent::AddTap(ItemId::from("7"))]);
    }
}
