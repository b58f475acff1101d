use storefront_core::PopupContent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DetailPopupProps {
    /// `None` keeps the overlay hidden.
    #[prop_or_default]
    pub content: Option<PopupContent>,
    pub on_close: Callback<()>,
}

#[function_component(DetailPopup)]
pub fn detail_popup(props: &DetailPopupProps) -> Html {
    let container_ref = use_node_ref();
    let open = props.content.is_some();

    {
        let container_ref = container_ref.clone();
        use_effect_with(open, move |is_open| {
            if *is_open && let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    let content = props.content.clone().unwrap_or_default();

    html! {
        <div
            id="popup"
            class={classes!("popup", (!open).then_some("hidden"))}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!open).to_string()}
            aria-labelledby="popup-title"
            tabindex="-1"
            onkeydown={on_keydown}
            ref={container_ref}
        >
            <div class="popup-backdrop" onclick={on_close.clone()}></div>
            <div class="popup-content">
                <button type="button" class="close-popup" aria-label="Close dialog" onclick={on_close}>{ "X" }</button>
                <img id="popup-image" src={content.image} alt={content.title.clone()} />
                <h2 id="popup-title">{ content.title }</h2>
                <p id="popup-description">{ content.description }</p>
                <p id="popup-price">{ content.price }</p>
            </div>
        </div>
    }
}
