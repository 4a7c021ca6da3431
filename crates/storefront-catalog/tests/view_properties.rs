use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;
use storefront_catalog::{Catalog, CatalogView, Item, SortOrder, KNOWN_CATEGORIES};

#[derive(Debug, Clone)]
enum Action {
    Category(usize),
    NoCategory,
    Search(String),
    Sort,
    Clear,
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((0u32..50, 0usize..KNOWN_CATEGORIES.len(), "[a-c]{1,3}"), 0..12).prop_map(
        |rows| {
            let items = rows
                .into_iter()
                .enumerate()
                .map(|(i, (price, cat, name))| {
                    Item::new(i.to_string(), name, Decimal::from(price))
                        .with_category(KNOWN_CATEGORIES[cat])
                })
                .collect();
            Catalog::from_items(items).unwrap()
        },
    )
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..KNOWN_CATEGORIES.len()).prop_map(Action::Category),
        Just(Action::NoCategory),
        "[a-c]{0,2}".prop_map(Action::Search),
        Just(Action::Sort),
        Just(Action::Clear),
    ]
}

fn apply(view: &mut CatalogView, action: &Action) {
    match action {
        Action::Category(i) => view.set_category(KNOWN_CATEGORIES[*i]),
        Action::NoCategory => view.set_category(""),
        Action::Search(k) => view.set_search_keyword(k.clone()),
        Action::Sort => view.toggle_sort_by_price(),
        Action::Clear => view.clear_filters(),
    }
}

fn ids(items: &[Item]) -> Vec<String> {
    items.iter().map(|i| i.id.to_string()).collect()
}

#[test]
fn spec_example_sort_is_stable() {
    let catalog = Catalog::from_items(vec![
        Item::new("1", "a", Decimal::from(30)),
        Item::new("2", "b", Decimal::from(10)),
        Item::new("3", "c", Decimal::from(10)),
    ])
    .unwrap();
    let mut view = CatalogView::new(catalog);

    view.toggle_sort_by_price();
    assert_eq!(ids(view.displayed()), vec!["2", "3", "1"]);
    assert_eq!(view.sort_order(), SortOrder::Descending);
}

#[test]
fn groceries_then_empty_category_restores_catalog() {
    let catalog = Catalog::from_items(vec![
        Item::new("1", "milk", Decimal::from(2)).with_category("groceries"),
        Item::new("2", "bike", Decimal::from(200)).with_category("toys"),
        Item::new("3", "eggs", Decimal::from(3)).with_category("groceries"),
    ])
    .unwrap();
    let mut view = CatalogView::new(catalog);

    view.set_category("groceries");
    view.set_category("");
    assert_eq!(ids(view.displayed()), vec!["1", "2", "3"]);
}

proptest! {
    #[test]
    fn prop_displayed_is_subset_of_catalog(
        catalog in catalog_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..20)
    ) {
        let known: HashSet<String> = ids(catalog.items()).into_iter().collect();
        let mut view = CatalogView::new(catalog);

        for action in &actions {
            apply(&mut view, action);
            let shown = ids(view.displayed());
            let unique: HashSet<&String> = shown.iter().collect();
            prop_assert_eq!(unique.len(), shown.len());
            prop_assert!(shown.iter().all(|id| known.contains(id)));
        }
    }

    #[test]
    fn prop_double_sort_alternates_and_keeps_ties(catalog in catalog_strategy()) {
        let mut view = CatalogView::new(catalog.clone());

        view.toggle_sort_by_price();
        let asc = view.displayed().to_vec();
        prop_assert!(asc.windows(2).all(|w| w[0].unit_price <= w[1].unit_price));

        view.toggle_sort_by_price();
        let desc = view.displayed().to_vec();
        prop_assert!(desc.windows(2).all(|w| w[0].unit_price >= w[1].unit_price));
        prop_assert_eq!(view.sort_order(), SortOrder::Ascending);

        // equal prices keep provider order in both directions
        let position = |id: &str| catalog.items().iter().position(|i| i.id.as_str() == id);
        for pair in desc.windows(2) {
            if pair[0].unit_price == pair[1].unit_price {
                prop_assert!(position(pair[0].id.as_str()) < position(pair[1].id.as_str()));
            }
        }
    }

    #[test]
    fn prop_clear_filters_restores_provider_order(
        catalog in catalog_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..20)
    ) {
        let original = ids(catalog.items());
        let mut view = CatalogView::new(catalog);

        for action in &actions {
            apply(&mut view, action);
        }
        view.clear_filters();

        prop_assert_eq!(ids(view.displayed()), original);
    }
}
