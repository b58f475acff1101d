use anyhow::{Result, ensure};
use storefront_core::{
    GridView, PriceRange, SearchQuery, StoreEvent, filter_by_category, filter_by_search,
};

use super::{ScenarioCtx, titles, view_products};

pub fn run(ctx: &ScenarioCtx) -> Result<()> {
    let mut store = ctx.fresh_store()?;
    let all = store.catalog().products().to_vec();

    let identity = filter_by_search(&all, &SearchQuery::from_inputs("", "", ""));
    ensure!(identity == all, "empty query with default bounds dropped products");

    let mut prices: Vec<f64> = all.iter().map(|p| p.price).collect();
    prices.sort_by(f64::total_cmp);
    let lo = prices[prices.len() / 4];
    let hi = prices[prices.len() * 3 / 4];
    store.apply(StoreEvent::Search(SearchQuery::new("", PriceRange::new(lo, hi))));
    let ranged = view_products(&store);
    ensure!(!ranged.is_empty(), "range [{lo}, {hi}] matched nothing");
    ensure!(
        ranged.iter().all(|p| lo <= p.price && p.price <= hi),
        "range [{lo}, {hi}] leaked a product"
    );
    ctx.note(&format!("range [{lo}, {hi}] kept {} products", ranged.len()));

    // A zero max means "no upper bound".
    store.apply(StoreEvent::Search(SearchQuery::from_inputs("", "0", "0")));
    ensure!(view_products(&store).len() == all.len(), "zero bounds should keep everything");

    let needle = all[0].title.to_uppercase();
    store.apply(StoreEvent::Search(SearchQuery::from_inputs(&needle, "", "")));
    ensure!(
        titles(view_products(&store)).contains(&all[0].title.as_str()),
        "case-insensitive search missed {needle:?}"
    );

    store.apply(StoreEvent::Search(SearchQuery::from_inputs(
        "\u{1f6d2} no such product",
        "",
        "",
    )));
    ensure!(store.grid() == GridView::NoMatches, "zero matches should show the empty message");
    ensure!(store.page_controls().is_none(), "zero matches should empty the pagination");

    for category in store.catalog().categories() {
        store.apply(StoreEvent::SelectCategory(category.to_uppercase()));
        let expected = filter_by_category(&all, &category);
        ensure!(
            view_products(&store) == expected.as_slice(),
            "category {category:?} did not recompute from the full catalog"
        );
    }

    store.apply(StoreEvent::SelectCategory(String::new()));
    ensure!(view_products(&store) == all.as_slice(), "empty category should show everything");
    Ok(())
}
