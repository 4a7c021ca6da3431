use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use storefront_cart::{CartLedger, FileStore, KeyValueStore, MemoryStore, StorageError, DEFAULT_CART_KEY};
use storefront_catalog::{Item, ItemId};

/// Store whose reads and writes always fail
#[derive(Debug, Default)]
struct BrokenStore {
    writes: AtomicUsize,
}

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Err(StorageError::InvalidKey(key.to_string()))
    }

    async fn set(&self, key: &str, _value: Vec<u8>) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

fn soap() -> Item {
    Item::new("soap", "Soap", dec!(3.25)).with_category("lifestyle")
}

fn kite() -> Item {
    Item::new("kite", "Kite", dec!(12)).with_category("toys")
}

#[tokio::test]
async fn cart_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = Arc::new(FileStore::new(dir.path()));
        let mut cart = CartLedger::load(store, DEFAULT_CART_KEY).await;
        cart.add_item(&soap());
        cart.add_item(&kite());
        cart.add_item(&soap());
        cart.close().await;
    }

    let store = Arc::new(FileStore::new(dir.path()));
    let cart = CartLedger::load(store, DEFAULT_CART_KEY).await;

    let order: Vec<(&str, u32)> = cart.lines().map(|l| (l.id().as_str(), l.quantity)).collect();
    assert_eq!(order, vec![("soap", 2), ("kite", 1)]);
    assert_eq!(cart.display_amount(), dec!(18.50));
}

#[tokio::test]
async fn checkout_is_persisted_as_empty_cart() {
    let store = MemoryStore::new();
    let mut cart = CartLedger::load(Arc::new(store.clone()), DEFAULT_CART_KEY).await;
    cart.add_item(&kite());

    let receipt = cart.checkout().expect("non-empty cart");
    cart.flush().await;

    assert_eq!(receipt.item_count, 1);
    let reloaded = CartLedger::load(Arc::new(store), DEFAULT_CART_KEY).await;
    assert!(reloaded.is_empty());
}

#[tokio::test]
async fn storage_failures_never_reach_the_caller() {
    let store = Arc::new(BrokenStore::default());
    let mut cart = CartLedger::load(store.clone(), DEFAULT_CART_KEY).await;
    assert!(cart.is_empty());

    cart.add_item(&soap());
    cart.remove_item(&ItemId::from("soap"));
    cart.remove_item(&ItemId::from("soap"));
    cart.flush().await;

    // two real mutations, the second remove was a no-op on an empty cart
    assert_eq!(store.writes.load(Ordering::SeqCst), 2);
    assert!(cart.is_empty());
}

#[tokio::test]
async fn separate_keys_do_not_interfere() {
    let store = MemoryStore::new();
    let mut first = CartLedger::load(Arc::new(store.clone()), "cart-a").await;
    let second = CartLedger::load(Arc::new(store.clone()), "cart-b").await;

    first.add_item(&kite());
    first.flush().await;
    second.flush().await;

    assert!(store.get("cart-b").await.unwrap().is_none());
    assert!(store.get("cart-a").await.unwrap().is_some());
}

#[tokio::test]
async fn stored_negative_price_lines_are_dropped_on_load() {
    let store = MemoryStore::new();
    let payload = br#"[
        {"id":"a","productName":"A","unitPrice":-5,"quantity":2},
        {"id":"soap","productName":"Soap","unitPrice":3.25,"quantity":1}
    ]"#;
    store.set(DEFAULT_CART_KEY, payload.to_vec()).await.unwrap();

    let cart = CartLedger::load(Arc::new(store), DEFAULT_CART_KEY).await;

    assert!(cart.get(&ItemId::from("a")).is_none());
    assert_eq!(cart.total_item_count(), 1);
    assert_eq!(cart.total_amount(), dec!(3.25));
    assert!(cart.total_amount() >= rust_decimal::Decimal::ZERO);
}
