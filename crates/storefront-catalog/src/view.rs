//! Catalog view engine
//!
//! [`CatalogView`] owns the session's base item list and the filter, search
//! and sort settings, and keeps `displayed` in step with them after every
//! operation.
//!
//! Sorting with no filter active reorders the base list itself, so the view
//! keeps the [`Catalog`] it was built from to restore provider order in
//! [`CatalogView::clear_filters`].

use crate::catalog::Catalog;
use crate::derive::{derive_view, sort_by_price, SortOrder};
use crate::item::{Item, ItemId};

/// Coarse state of the catalog screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// No category and no keyword
    Idle,
    /// Category filter active
    Filtered,
    /// Keyword search active (category ignored)
    Searching,
}

/// Derived view over a catalog
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Catalog,
    all_items: Vec<Item>,
    selected_category: String,
    search_keyword: String,
    sort_order: SortOrder,
    displayed: Vec<Item>,
    base_sorted: bool,
    view_sorted: bool,
}

impl CatalogView {
    /// Create view showing the whole catalog in provider order
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let all_items = catalog.items().to_vec();
        Self {
            displayed: all_items.clone(),
            all_items,
            catalog,
            selected_category: String::new(),
            search_keyword: String::new(),
            sort_order: SortOrder::Ascending,
            base_sorted: false,
            view_sorted: false,
        }
    }

    /// Select a category; empty shows everything
    ///
    /// Clears any keyword so the category becomes the basis of the view.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        self.search_keyword.clear();
        tracing::debug!(category = %self.selected_category, "category selected");
        self.recompute();
    }

    /// Set the search keyword; empty clears the search
    pub fn set_search_keyword(&mut self, keyword: impl Into<String>) {
        self.search_keyword = keyword.into();
        tracing::debug!(keyword = %self.search_keyword, "search keyword changed");
        self.recompute();
    }

    /// Sort the displayed items by price, then flip the direction
    ///
    /// With no category and no keyword the base list itself is reordered.
    pub fn toggle_sort_by_price(&mut self) {
        let order = self.sort_order;

        if self.phase() == ViewPhase::Idle {
            sort_by_price(&mut self.all_items, order);
            self.displayed.clone_from(&self.all_items);
            self.base_sorted = true;
        } else {
            self.displayed = derive_view(
                &self.all_items,
                &self.selected_category,
                &self.search_keyword,
                Some(order),
            );
            self.view_sorted = true;
        }

        self.sort_order = order.toggled();
        tracing::debug!(applied = %order, next = %self.sort_order, "sorted by price");
    }

    /// Reset category and keyword and restore provider order
    ///
    /// The next sort direction is left as is.
    pub fn clear_filters(&mut self) {
        self.selected_category.clear();
        self.search_keyword.clear();
        self.all_items = self.catalog.items().to_vec();
        self.base_sorted = false;
        tracing::debug!("filters cleared");
        self.recompute();
    }

    // A filter change re-derives the subset unsorted
    fn recompute(&mut self) {
        self.displayed = derive_view(&self.all_items, &self.selected_category, &self.search_keyword, None);
        self.view_sorted = false;
    }

    /// Items currently shown
    #[inline]
    #[must_use]
    pub fn displayed(&self) -> &[Item] {
        &self.displayed
    }

    /// Base list (provider order unless sorted while idle)
    #[inline]
    #[must_use]
    pub fn all_items(&self) -> &[Item] {
        &self.all_items
    }

    /// Selected category, empty when none
    #[inline]
    #[must_use]
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Current keyword, empty when none
    #[inline]
    #[must_use]
    pub fn search_keyword(&self) -> &str {
        &self.search_keyword
    }

    /// Direction the next sort will use
    #[inline]
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Whether the displayed order reflects a price sort
    #[inline]
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.base_sorted || self.view_sorted
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        if !self.search_keyword.is_empty() {
            ViewPhase::Searching
        } else if !self.selected_category.is_empty() {
            ViewPhase::Filtered
        } else {
            ViewPhase::Idle
        }
    }

    /// Catalog this view was built from
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Lookup item by id in the catalog
    #[inline]
    #[must_use]
    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.catalog.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn ids(view: &CatalogView) -> Vec<&str> {
        view.displayed().iter().map(|i| i.id.as_str()).collect()
    }

    fn view() -> CatalogView {
        let catalog = Catalog::from_items(vec![
            Item::new("1", "Rice", dec!(30)).with_category("groceries"),
            Item::new("2", "Robot", dec!(10)).with_category("toys"),
            Item::new("3", "Beans", dec!(10)).with_category("groceries"),
            Item::new("4", "Lamp", dec!(25)).with_category("furniture"),
            Item::new("5", "Ricecooker", dec!(5)).with_category("gadgets"),
        ])
        .unwrap();
        CatalogView::new(catalog)
    }

    #[test]
    fn starts_idle_with_full_catalog() {
        let v = view();
        assert_eq!(v.phase(), ViewPhase::Idle);
        assert_eq!(ids(&v), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(v.sort_order(), SortOrder::Ascending);
        assert!(!v.is_sorted());
    }

    #[test]
    fn category_then_empty_restores_full_list() {
        let mut v = view();
        v.set_category("groceries");
        assert_eq!(v.phase(), ViewPhase::Filtered);
        assert_eq!(ids(&v), vec!["1", "3"]);

        v.set_category("");
        assert_eq!(v.phase(), ViewPhase::Idle);
        assert_eq!(ids(&v), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn search_replaces_category_basis() {
        let mut v = view();
        v.set_category("groceries");
        v.set_search_keyword("rice");

        assert_eq!(v.phase(), ViewPhase::Searching);
        assert_eq!(v.selected_category(), "groceries");
        // gadgets item matches too: search does not narrow the category
        assert_eq!(ids(&v), vec!["1", "5"]);

        v.set_search_keyword("");
        assert_eq!(ids(&v), vec!["1", "3"]);
    }

    #[test]
    fn category_tap_clears_keyword() {
        let mut v = view();
        v.set_search_keyword("robot");
        v.set_category("furniture");

        assert_eq!(v.search_keyword(), "");
        assert_eq!(ids(&v), vec!["4"]);
    }

    #[test]
    fn idle_sort_reorders_base_list() {
        let mut v = view();
        v.toggle_sort_by_price();

        assert_eq!(ids(&v), vec!["5", "2", "3", "4", "1"]);
        assert_eq!(v.all_items()[0].id.as_str(), "5");
        assert_eq!(v.sort_order(), SortOrder::Descending);
        assert!(v.is_sorted());

        v.toggle_sort_by_price();
        assert_eq!(ids(&v), vec!["1", "4", "2", "3", "5"]);
        assert_eq!(v.sort_order(), SortOrder::Ascending);
    }

    #[test]
    fn filtered_sort_leaves_base_untouched() {
        let mut v = view();
        v.set_category("groceries");
        v.toggle_sort_by_price();

        assert_eq!(ids(&v), vec!["3", "1"]);
        assert_eq!(v.all_items()[0].id.as_str(), "1");
        assert_eq!(v.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn filter_change_drops_subset_sort() {
        let mut v = view();
        v.set_category("groceries");
        v.toggle_sort_by_price();
        assert_eq!(ids(&v), vec!["3", "1"]);

        v.set_search_keyword("rice");
        v.set_search_keyword("");

        assert_eq!(ids(&v), vec!["1", "3"]);
        assert!(!v.is_sorted());
        assert_eq!(v.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn category_after_idle_sort_uses_sorted_base() {
        let mut v = view();
        v.toggle_sort_by_price();
        v.set_category("groceries");

        assert_eq!(ids(&v), vec!["3", "1"]);
    }

    #[test]
    fn clear_filters_restores_provider_order_but_not_direction() {
        let mut v = view();
        v.toggle_sort_by_price();
        v.set_category("toys");
        v.clear_filters();

        assert_eq!(v.phase(), ViewPhase::Idle);
        assert_eq!(ids(&v), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(v.sort_order(), SortOrder::Descending);
        assert!(!v.is_sorted());
    }

    #[test]
    fn find_uses_catalog() {
        let v = view();
        assert_eq!(v.find(&ItemId::from("4")).map(|i| i.product_name.as_str()), Some("Lamp"));
        assert!(v.find(&ItemId::from("nope")).is_none());
    }
}
