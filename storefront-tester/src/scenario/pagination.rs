use anyhow::{Context, Result, ensure};
use storefront_core::{GridView, PAGE_SIZE, StoreEvent};

use super::ScenarioCtx;

pub fn run(ctx: &ScenarioCtx) -> Result<()> {
    let mut store = ctx.fresh_store()?;
    let all = store.catalog().products().to_vec();
    let total = u32::try_from(all.len().div_ceil(PAGE_SIZE)).context("too many pages")?;

    store.apply(StoreEvent::PreviousPage);
    ensure!(store.current_page() == 1, "Previous on page 1 moved the page");

    for page in 1..=total {
        let controls = store.page_controls().context("controls missing")?;
        ensure!(controls.total_pages == total, "expected {total} pages");
        ensure!(
            controls.previous_disabled == (page == 1),
            "Previous disabled state wrong on page {page}"
        );
        ensure!(
            controls.next_disabled == (page == total),
            "Next disabled state wrong on page {page}"
        );
        ensure!(controls.label() == format!("Page {page} of {total}"), "label mismatch");

        let start = (page as usize - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(all.len());
        let GridView::Page(items) = store.grid() else {
            anyhow::bail!("page {page} rendered no grid");
        };
        ensure!(items == &all[start..end], "page {page} shows the wrong slice");
        ctx.note(&format!("page {page}: items {start}..{end}"));
        store.apply(StoreEvent::NextPage);
    }

    ensure!(store.current_page() == total, "Next on the last page moved the page");

    store.apply(StoreEvent::GoToPage(1));
    ensure!(store.current_page() == 1, "numbered page button did not jump");
    Ok(())
}
