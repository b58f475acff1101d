use anyhow::{Result, ensure};
use storefront_core::{SearchQuery, SortMode, StoreEvent};

use super::{ScenarioCtx, view_products};

pub fn run(ctx: &ScenarioCtx) -> Result<()> {
    let mut store = ctx.fresh_store()?;
    let all = store.catalog().products().to_vec();

    store.apply(StoreEvent::Sort(SortMode::Min));
    ensure!(
        view_products(&store).windows(2).all(|w| w[0].price <= w[1].price),
        "Min sort is not non-decreasing"
    );

    store.apply(StoreEvent::Sort(SortMode::Max));
    ensure!(
        view_products(&store).windows(2).all(|w| w[0].price >= w[1].price),
        "Max sort is not non-increasing"
    );

    // Sorting starts from the full catalog, not the filtered view.
    store.apply(StoreEvent::Search(SearchQuery::from_inputs(&all[0].title, "", "")));
    store.apply(StoreEvent::Sort(SortMode::from_value("")));
    ensure!(
        view_products(&store) == all.as_slice(),
        "default sort should restore catalog order"
    );
    Ok(())
}
