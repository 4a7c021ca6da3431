//! Testing utilities for the storefront workspace
//!
//! Shared fixtures for catalog and cart tests.

#![allow(missing_docs)]

use rust_decimal::Decimal;
use storefront_cart::{codec, CartLine};
use storefront_catalog::{Catalog, Item};

pub fn item(id: &str, name: &str, price: Decimal, category: &str) -> Item {
    Item::new(id, name, price).with_category(category)
}

/// Small mixed catalog with price ties inside and across categories
pub fn sample_items() -> Vec<Item> {
    vec![
        item("1", "Green Tea", Decimal::new(450, 2), "groceries"),
        item("2", "Race Car", Decimal::new(1999, 2), "toys"),
        item("3", "Honey", Decimal::new(450, 2), "groceries"),
        item("4", "Bookshelf", Decimal::new(8900, 2), "furniture"),
        item("5", "Tea Kettle", Decimal::new(2500, 2), "gadgets"),
        item("6", "Teddy Bear", Decimal::new(1999, 2), "toys"),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_items(sample_items()).unwrap()
}

/// Three uncategorised items priced 30, 10, 10
pub fn tie_catalog() -> Catalog {
    Catalog::from_items(vec![
        Item::new("1", "First", Decimal::from(30)),
        Item::new("2", "Second", Decimal::from(10)),
        Item::new("3", "Third", Decimal::from(10)),
    ])
    .unwrap()
}

/// Encoded cart payload with the given quantities
pub fn stored_cart(lines: &[(Item, u32)]) -> Vec<u8> {
    let lines: Vec<CartLine> = lines
        .iter()
        .map(|(item, quantity)| CartLine {
            item: item.clone(),
            quantity: *quantity,
        })
        .collect();
    codec::encode(&lines).unwrap()
}

pub fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}
