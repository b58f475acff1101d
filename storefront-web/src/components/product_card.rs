use storefront_core::format::card_price;
use storefront_core::{Product, StoreEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
    pub on_event: Callback<StoreEvent>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    let on_view = {
        let cb = props.on_event.clone();
        let product_id = product.id.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(StoreEvent::OpenDetail {
                product_id: product_id.clone(),
            });
        })
    };

    let on_add = {
        let cb = props.on_event.clone();
        let product_id = product.id.clone();
        #[cfg(target_arch = "wasm32")]
        let title = product.title.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(StoreEvent::AddToCart {
                product_id: product_id.clone(),
            });
            #[cfg(target_arch = "wasm32")]
            crate::a11y::set_status(&crate::a11y::added_message(&title));
        })
    };

    html! {
        <div class="card" data-product-id={product.id.clone()}>
            <img src={product.image.clone()} alt={product.title.clone()} />
            <div class="details">
                <h3>{ product.title.clone() }</h3>
                <p class="price">{ card_price(product.price) }</p>
                <div class="button-container">
                    <button type="button" class="view-details" onclick={on_view}>{ "View Details" }</button>
                    <button type="button" class="add-to-cart" onclick={on_add}>{ "Add to Cart" }</button>
                </div>
            </div>
        </div>
    }
}
