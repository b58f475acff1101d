use storefront_core::{
    GridView, JsonCatalog, NO_PRODUCTS_MESSAGE, PriceRange, SearchQuery, SortMode, StoreEvent,
    Storefront, filter_by_search, sort_by_price,
};

const FIXTURE: &str = include_str!("../fixtures/products.json");

fn loaded() -> Storefront {
    let mut store = Storefront::default();
    store.load_from(&JsonCatalog::new(FIXTURE));
    assert_eq!(store.catalog().len(), 13, "fixture should hold 13 products");
    store
}

fn visible_titles(store: &Storefront) -> Vec<String> {
    match store.grid() {
        GridView::Page(items) => items.iter().map(|p| p.title.clone()).collect(),
        GridView::Empty | GridView::NoMatches => Vec::new(),
    }
}

#[test]
fn identity_search_keeps_the_whole_catalog() {
    let store = loaded();
    let all = store.catalog().products();
    let result = filter_by_search(all, &SearchQuery::from_inputs("", "", ""));
    assert_eq!(result.as_slice(), all);
}

#[test]
fn every_ranged_result_is_within_bounds() {
    let store = loaded();
    let all = store.catalog().products();
    for (lo, hi) in [(0.0, 10.0), (10.0, 60.0), (60.0, 110.0), (100.0, 1000.0)] {
        let query = SearchQuery::new("", PriceRange::new(lo, hi));
        let result = filter_by_search(all, &query);
        assert!(
            result.iter().all(|p| lo <= p.price && p.price <= hi),
            "range [{lo}, {hi}] leaked a product"
        );
    }
}

#[test]
fn sort_modes_order_the_full_catalog() {
    let store = loaded();
    let all = store.catalog().products();
    let asc = sort_by_price(all, SortMode::Min);
    assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));
    let desc = sort_by_price(all, SortMode::Max);
    assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
    assert_eq!(sort_by_price(all, SortMode::from_value("")).as_slice(), all);
}

#[test]
fn thirteen_products_paginate_into_three_pages() {
    let mut store = loaded();
    let all: Vec<String> = store
        .catalog()
        .products()
        .iter()
        .map(|p| p.title.clone())
        .collect();

    let first = store.page_controls().expect("controls rendered");
    assert_eq!(first.total_pages, 3);
    assert!(first.previous_disabled && !first.next_disabled);
    assert_eq!(visible_titles(&store), all[0..6].to_vec());

    store.apply(StoreEvent::GoToPage(2));
    let middle = store.page_controls().expect("controls rendered");
    assert!(!middle.previous_disabled && !middle.next_disabled);

    store.apply(StoreEvent::GoToPage(3));
    let last = store.page_controls().expect("controls rendered");
    assert!(!last.previous_disabled && last.next_disabled);
    assert_eq!(visible_titles(&store), all[12..13].to_vec());
    assert_eq!(last.label(), "Page 3 of 3");
}

#[test]
fn zero_matches_render_the_empty_message() {
    let mut store = loaded();
    store.apply(StoreEvent::Search(SearchQuery::from_inputs(
        "backpack", "200", "",
    )));
    assert_eq!(store.grid(), GridView::NoMatches);
    assert!(store.page_controls().is_none());
    assert_eq!(NO_PRODUCTS_MESSAGE, "No products found.");
}

#[test]
fn search_then_category_does_not_compose() {
    let mut store = loaded();
    store.apply(StoreEvent::Search(SearchQuery::from_inputs("ssd", "", "")));
    assert_eq!(visible_titles(&store).len(), 2);
    store.apply(StoreEvent::SelectCategory("JEWELERY".to_string()));
    let titles = visible_titles(&store);
    assert_eq!(titles.len(), 4);
    assert!(titles.iter().all(|t| !t.contains("SSD")));
}

#[test]
fn cart_flow_over_rendered_products() {
    let mut store = loaded();
    for id in ["1", "1", "7"] {
        store.apply(StoreEvent::AddToCart {
            product_id: id.to_string(),
        });
    }
    let summary = store.cart().summary();
    assert_eq!(summary.total_quantity, 3);
    assert_eq!(summary.price_label(), "Total Price: $229.89");

    store.apply(StoreEvent::RemoveAt(0));
    let lines = store.cart().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].title, "White Gold Plated Princess");
    assert_eq!(store.cart().summary().quantity_label(), "Total Quantity: 1");
}
