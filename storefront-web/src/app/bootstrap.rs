#[cfg(target_arch = "wasm32")]
use crate::app::state::{AppStore, StoreAction};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Issue the catalog request once on mount and feed the outcome to the store.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_catalog_bootstrap(url: &str, dispatcher: UseReducerDispatcher<AppStore>) {
    let url = url.to_string();
    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::catalog::fetch_catalog(&url).await.map_err(|err| {
                crate::dom::console_error(&format!("Failed to fetch products: {err}"));
                err.to_string()
            });
            dispatcher.dispatch(StoreAction::Loaded(result));
        });
        || {}
    });
}
