use anyhow::{Context, Result, ensure};
use storefront_core::{Cart, StoreEvent};

use super::ScenarioCtx;

fn title_keyed_aggregation() -> Result<()> {
    let mut cart = Cart::new();
    cart.add_to_cart("Shirt", 10.0);
    cart.add_to_cart("Shirt", 10.0);
    ensure!(cart.lines().len() == 1, "duplicate title created a second line");
    let summary = cart.summary();
    ensure!(summary.total_quantity == 2, "quantity should be 2");
    ensure!(summary.price_label() == "Total Price: $20.00", "got {}", summary.price_label());

    cart.add_to_cart("Shirt", 99.0);
    let line = cart.find_line("Shirt").context("Shirt line vanished")?;
    ensure!(line.quantity == 3 && (line.price - 10.0).abs() < f64::EPSILON, "first price must stick");
    Ok(())
}

pub fn run(ctx: &ScenarioCtx) -> Result<()> {
    title_keyed_aggregation()?;

    let mut store = ctx.fresh_store()?;
    let products = store.catalog().products().to_vec();
    let first = products.first().context("empty catalog")?;
    let second = products
        .iter()
        .find(|p| p.title != first.title)
        .context("catalog needs two distinct titles")?;

    for id in [&first.id, &first.id, &second.id] {
        store.apply(StoreEvent::AddToCart {
            product_id: id.clone(),
        });
    }
    let summary = store.cart().summary();
    ensure!(summary.total_quantity == 3, "expected 3 items, got {}", summary.total_quantity);
    let expected = format!("Total Price: ${:.2}", first.price * 2.0 + second.price);
    ensure!(summary.price_label() == expected, "got {}, expected {expected}", summary.price_label());

    store.apply(StoreEvent::RemoveAt(0));
    let lines = store.cart().lines();
    ensure!(lines.len() == 1, "removal left {} lines", lines.len());
    ensure!(lines[0].title == second.title, "second line did not shift to position 0");
    ensure!(store.cart().summary().total_quantity == 1, "summary kept the removed line");

    store.apply(StoreEvent::RemoveAt(5));
    ensure!(store.cart().lines().len() == 1, "out-of-range removal changed the cart");

    let id = store.cart().lines()[0].id;
    store.apply(StoreEvent::RemoveLine(id));
    ensure!(store.cart().is_empty(), "remove by line id failed");
    ctx.note("cart emptied");
    Ok(())
}
