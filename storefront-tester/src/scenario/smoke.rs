use anyhow::{Context, Result, ensure};
use storefront_core::{GridView, PAGE_SIZE};

use super::ScenarioCtx;

pub fn run(ctx: &ScenarioCtx) -> Result<()> {
    let store = ctx.fresh_store()?;
    let total = store.catalog().len();
    ctx.note(&format!("loaded {total} products"));

    let GridView::Page(first_page) = store.grid() else {
        anyhow::bail!("page 1 was not painted after load");
    };
    ensure!(
        first_page.len() == total.min(PAGE_SIZE),
        "page 1 shows {} products, expected {}",
        first_page.len(),
        total.min(PAGE_SIZE)
    );
    ensure!(
        first_page == &store.catalog().products()[..first_page.len()],
        "page 1 is not the head of the catalog"
    );

    let controls = store
        .page_controls()
        .context("pagination controls missing after load")?;
    let expected = format!("Page 1 of {}", total.div_ceil(PAGE_SIZE));
    ensure!(controls.label() == expected, "label {:?}, expected {expected:?}", controls.label());
    ensure!(store.cart().is_empty(), "cart should start empty");
    ensure!(!store.popup().is_open(), "popup should start closed");
    Ok(())
}
