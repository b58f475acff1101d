//! Storefront Core
//!
//! Platform-agnostic logic for the storefront widget: the product catalog, the
//! search/category/sort view pipeline, pagination, the title-keyed cart and the
//! detail popup, all owned by a single [`Storefront`] state value.
//! This crate has no DOM or network dependencies.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod event;
pub mod filter;
pub mod format;
pub mod pagination;
pub mod popup;
pub mod state;

// Re-export commonly used types
pub use cart::{Cart, CartChange, CartLine, CartSummary, LineId};
pub use catalog::{Catalog, CatalogError, Product};
pub use config::{ConfigError, DEFAULT_CATALOG_URL, StorefrontConfig};
pub use event::{Redraw, StoreEvent};
pub use filter::{
    PriceRange, SearchQuery, SortMode, filter_by_category, filter_by_search, parse_price_bound,
    sort_by_price,
};
pub use pagination::{PAGE_SIZE, PageButton, PageControls, Paginator};
pub use popup::{DetailPopup, PopupContent};
pub use state::{CatalogView, GridView, LoadStatus, NO_PRODUCTS_MESSAGE, Storefront};

/// Trait for abstracting where the product list comes from.
/// Platform-specific front ends may fetch asynchronously and call
/// [`Storefront::finish_load`] directly instead.
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the product list cannot be read or parsed.
    fn load_catalog(&self) -> Result<Vec<Product>, Self::Error>;
}

/// Catalog source backed by an in-memory JSON document.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    json: String,
}

impl JsonCatalog {
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl CatalogSource for JsonCatalog {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Vec<Product>, Self::Error> {
        Ok(serde_json::from_str(&self.json)?)
    }
}
