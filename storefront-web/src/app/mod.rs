use yew::prelude::*;

pub mod bootstrap;
pub mod state;
pub mod view;

pub use state::{AppStore, StoreAction};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(crate::config::load_from_static);
    let store = state::use_storefront(&config);

    #[cfg(target_arch = "wasm32")]
    {
        bootstrap::use_catalog_bootstrap(&config.catalog_url, store.dispatcher());
    }

    let on_event = {
        let dispatcher = store.dispatcher();
        Callback::from(move |event| dispatcher.dispatch(StoreAction::Event(event)))
    };

    html! {
        <view::StorefrontView store={store.0.clone()} {on_event} />
    }
}
