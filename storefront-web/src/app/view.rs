use crate::a11y::CART_STATUS_ID;
use crate::components::cart_panel::CartPanel;
use crate::components::cart_summary::CartSummary;
use crate::components::detail_popup::DetailPopup;
use crate::components::filter_bar::FilterBar;
use crate::components::pagination::Pagination;
use crate::components::product_grid::{GridContent, ProductGrid};
use storefront_core::{GridView, StoreEvent, Storefront};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StorefrontViewProps {
    pub store: Storefront,
    pub on_event: Callback<StoreEvent>,
}

fn grid_content(grid: GridView<'_>) -> GridContent {
    match grid {
        GridView::Empty => GridContent::Empty,
        GridView::Page(items) => GridContent::Products(items.to_vec()),
        GridView::NoMatches => GridContent::NoMatches,
    }
}

#[function_component(StorefrontView)]
pub fn storefront_view(props: &StorefrontViewProps) -> Html {
    let store = &props.store;
    let on_close = {
        let cb = props.on_event.clone();
        Callback::from(move |()| cb.emit(StoreEvent::CloseDetail))
    };

    html! {
        <main class="storefront">
            <FilterBar
                categories={store.catalog().categories()}
                on_event={props.on_event.clone()}
            />
            <ProductGrid content={grid_content(store.grid())} on_event={props.on_event.clone()} />
            <Pagination controls={store.page_controls()} on_event={props.on_event.clone()} />
            <aside class="cart" aria-label="Shopping cart">
                <h2>{ "Cart" }</h2>
                <CartPanel lines={store.cart().lines().to_vec()} on_event={props.on_event.clone()} />
                <CartSummary summary={store.cart().summary()} />
                <div id={CART_STATUS_ID} class="visually-hidden" aria-live="polite"></div>
            </aside>
            <DetailPopup content={store.popup().content().cloned()} {on_close} />
        </main>
    }
}
