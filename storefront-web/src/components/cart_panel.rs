use storefront_core::{CartLine, StoreEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CartPanelProps {
    pub lines: Vec<CartLine>,
    pub on_event: Callback<StoreEvent>,
}

#[function_component(CartPanel)]
pub fn cart_panel(props: &CartPanelProps) -> Html {
    html! {
        <div id="cart-items" class="cart-items">
            { for props.lines.iter().map(|line| {
                let on_remove = {
                    let cb = props.on_event.clone();
                    let id = line.id;
                    #[cfg(target_arch = "wasm32")]
                    let title = line.title.clone();
                    Callback::from(move |_: MouseEvent| {
                        cb.emit(StoreEvent::RemoveLine(id));
                        #[cfg(target_arch = "wasm32")]
                        crate::a11y::set_status(&crate::a11y::removed_message(&title));
                    })
                };
                html! {
                    <p data-line-id={line.id.to_string()}>
                        { line.label() }
                        <button type="button" class="delete-button" onclick={on_remove}>{ "Remove" }</button>
                    </p>
                }
            }) }
        </div>
    }
}
