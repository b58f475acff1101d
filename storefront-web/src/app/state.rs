use std::rc::Rc;
use storefront_core::{Product, StoreEvent, Storefront, StorefrontConfig};
use yew::prelude::*;

/// Everything the reducer can be told.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// Outcome of the one-shot catalog request.
    Loaded(Result<Vec<Product>, String>),
    Event(StoreEvent),
}

/// Reducer wrapper around [`Storefront`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppStore(pub Storefront);

impl AppStore {
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self(Storefront::new(config))
    }
}

impl Reducible for AppStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.0.clone();
        let redraw = match action {
            StoreAction::Loaded(result) => store.finish_load(result),
            StoreAction::Event(event) => store.apply(event),
        };
        if redraw.is_empty() && store == self.0 {
            return self;
        }
        Rc::new(Self(store))
    }
}

#[hook]
pub fn use_storefront(config: &StorefrontConfig) -> UseReducerHandle<AppStore> {
    let config = config.clone();
    use_reducer(move || AppStore::new(&config))
}
