use super::product_card::ProductCard;
use storefront_core::{NO_PRODUCTS_MESSAGE, Product, StoreEvent};
use yew::prelude::*;

/// Contents of the product grid region.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GridContent {
    /// Nothing painted yet.
    #[default]
    Empty,
    Products(Vec<Product>),
    NoMatches,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProductGridProps {
    #[prop_or_default]
    pub content: GridContent,
    pub on_event: Callback<StoreEvent>,
}

#[function_component(ProductGrid)]
pub fn product_grid(props: &ProductGridProps) -> Html {
    let body = match &props.content {
        GridContent::Empty => Html::default(),
        GridContent::NoMatches => html! { <p>{ NO_PRODUCTS_MESSAGE }</p> },
        GridContent::Products(products) => html! {
            <>
                { for products.iter().map(|product| html! {
                    <ProductCard product={product.clone()} on_event={props.on_event.clone()} />
                }) }
            </>
        },
    };

    html! {
        <div id="product-container" class="product-container" aria-live="polite">
            { body }
        </div>
    }
}
