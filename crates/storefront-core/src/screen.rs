//! Storefront screen controller
//!
//! [`Storefront`] owns the catalog view and the cart ledger for one session
//! and routes each [`UiEvent`] to the component responsible for it. The
//! rendering layer reads the result back through [`Storefront::snapshot`].

use crate::config::StorefrontConfig;
use crate::error::{StorefrontError, StorefrontResult};
use crate::event::UiEvent;
use crate::snapshot::ScreenSnapshot;
use std::path::Path;
use std::sync::Arc;
use storefront_cart::{CartLedger, KeyValueStore, Receipt};
use storefront_catalog::{Catalog, CatalogView};

/// Sample catalog bundled with the crate
const SAMPLE_CATALOG: &str = include_str!("../data/items.json");

/// Parse the bundled sample catalog
///
/// # Errors
/// Returns error only if the bundled data is invalid
pub fn sample_catalog() -> StorefrontResult<Catalog> {
    Ok(Catalog::from_json(SAMPLE_CATALOG)?)
}

/// Read a catalog file, or the bundled sample when `path` is `None`
///
/// # Errors
/// Returns error if the file cannot be read or parsed
pub fn load_catalog(path: Option<&Path>) -> StorefrontResult<Catalog> {
    let Some(path) = path else {
        return sample_catalog();
    };
    let raw = std::fs::read_to_string(path).map_err(|source| StorefrontError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Catalog::from_json(&raw)?)
}

/// One storefront session
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    view: CatalogView,
    cart: CartLedger,
    show_cart: bool,
    checkout_confirmed: bool,
    last_receipt: Option<Receipt>,
}

impl Storefront {
    /// Open session, loading the cart from `store`
    pub async fn open(config: StorefrontConfig, catalog: Catalog, store: Arc<dyn KeyValueStore>) -> Self {
        let cart = CartLedger::load(store, config.cart_key.clone()).await;
        tracing::info!(items = catalog.len(), cart_lines = cart.len(), "storefront opened");
        Self::with_ledger(config, catalog, cart)
    }

    /// Session whose cart is not persisted
    #[must_use]
    pub fn in_memory(catalog: Catalog) -> Self {
        Self::with_ledger(StorefrontConfig::default(), catalog, CartLedger::new())
    }

    fn with_ledger(config: StorefrontConfig, catalog: Catalog, cart: CartLedger) -> Self {
        Self {
            config,
            view: CatalogView::new(catalog),
            cart,
            show_cart: false,
            checkout_confirmed: false,
            last_receipt: None,
        }
    }

    /// Apply one UI event
    ///
    /// # Errors
    /// Returns [`StorefrontError::UnknownItem`] when `AddTap` names an id
    /// absent from the catalog; state is unchanged in that case
    pub fn handle(&mut self, event: UiEvent) -> StorefrontResult<()> {
        tracing::trace!(?event, "ui event");

        match event {
            UiEvent::CategoryTap(category) => self.view.set_category(category),
            UiEvent::SearchChanged(keyword) => self.view.set_search_keyword(keyword),
            UiEvent::SortTap => self.view.toggle_sort_by_price(),
            UiEvent::ClearFiltersTap => self.view.clear_filters(),
            UiEvent::AddTap(id) => {
                let item = self.view.find(&id).ok_or(StorefrontError::UnknownItem(id))?;
                self.cart.add_item(item);
            }
            UiEvent::RemoveTap(id) => self.cart.remove_item(&id),
            UiEvent::ClearCartTap => self.cart.clear(),
            UiEvent::CheckoutTap => {
                if let Some(receipt) = self.cart.checkout() {
                    self.checkout_confirmed = true;
                    self.last_receipt = Some(receipt);
                }
            }
            UiEvent::ToggleCartView => self.show_cart = !self.show_cart,
            UiEvent::DismissConfirmation => {
                if self.checkout_confirmed {
                    self.checkout_confirmed = false;
                    self.show_cart = false;
                }
            }
        }
        Ok(())
    }

    /// Apply events in order, stopping at the first error
    ///
    /// # Errors
    /// Returns the first error from [`Storefront::handle`]
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = UiEvent>) -> StorefrontResult<()> {
        for event in events {
            self.handle(event)?;
        }
        Ok(())
    }

    /// Current output surface
    #[must_use]
    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            displayed_items: self.view.displayed().to_vec(),
            cart_lines: self.cart.lines().cloned().collect(),
            total_item_count: self.cart.total_item_count(),
            total_amount: format!("{:.2}", self.cart.display_amount()),
            checkout_confirmed: self.checkout_confirmed,
            show_cart: self.show_cart,
            show_clear_filters: !self.show_cart && !self.view.selected_category().is_empty(),
            selected_category: self.view.selected_category().to_string(),
            search_keyword: self.view.search_keyword().to_string(),
            sort_order: self.view.sort_order(),
        }
    }

    /// Catalog view
    #[inline]
    #[must_use]
    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Cart ledger
    #[inline]
    #[must_use]
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// Configuration the session was opened with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Receipt of the most recent checkout
    #[inline]
    #[must_use]
    pub fn last_receipt(&self) -> Option<&Receipt> {
        self.last_receipt.as_ref()
    }

    /// Whether the confirmation dialog is showing
    #[inline]
    #[must_use]
    pub fn checkout_confirmed(&self) -> bool {
        self.checkout_confirmed
    }

    /// Wait for pending cart writes
    pub async fn flush(&self) {
        self.cart.flush().await;
    }

    /// Drain pending cart writes and end the session
    pub async fn close(self) {
        self.cart.close().await;
    }
}
