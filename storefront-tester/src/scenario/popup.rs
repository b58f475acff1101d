use anyhow::{Context, Result, ensure};
use storefront_core::{PopupContent, StoreEvent};

use super::ScenarioCtx;

pub fn run(ctx: &ScenarioCtx) -> Result<()> {
    let mut store = ctx.fresh_store()?;
    let products = store.catalog().products().to_vec();
    let first = products.first().context("empty catalog")?;
    let last = products.last().context("empty catalog")?;

    store.apply(StoreEvent::OpenDetail {
        product_id: first.id.clone(),
    });
    let shown = store.popup().content().context("popup did not open")?;
    ensure!(*shown == PopupContent::from(first), "popup content does not match the product");

    store.apply(StoreEvent::OpenDetail {
        product_id: last.id.clone(),
    });
    let shown = store.popup().content().context("popup closed on reopen")?;
    ensure!(shown.title == last.title, "reopen kept stale content");
    ensure!(shown.price.starts_with("Price: $"), "price line {:?}", shown.price);

    store.apply(StoreEvent::CloseDetail);
    ensure!(!store.popup().is_open(), "popup stayed open");
    ensure!(store.popup().content().is_none(), "popup retained content after close");
    Ok(())
}
