use storefront_core::CartSummary as Totals;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CartSummaryProps {
    #[prop_or_default]
    pub summary: Totals,
}

#[function_component(CartSummary)]
pub fn cart_summary(props: &CartSummaryProps) -> Html {
    html! {
        <div class="cart-summary">
            <p id="totalQuantity">{ props.summary.quantity_label() }</p>
            <p id="totalPrice">{ props.summary.price_label() }</p>
        </div>
    }
}
