//! Application state: catalog, current view, page, cart and popup in one owner.
use crate::CatalogSource;
use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::config::StorefrontConfig;
use crate::event::{Redraw, StoreEvent};
use crate::filter::{SearchQuery, SortMode, filter_by_category, filter_by_search, sort_by_price};
use crate::pagination::{PageControls, Paginator};
use crate::popup::DetailPopup;
use std::fmt::Display;

/// Text shown in the grid when a search matches nothing.
pub const NO_PRODUCTS_MESSAGE: &str = "No products found.";

/// Progress of the one-time catalog request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// Diagnostic text for the operator; never shown in the page.
    Failed(String),
}

/// The sequence most recently handed to the grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogView {
    /// Nothing has been painted yet (catalog pending or failed).
    #[default]
    Unpainted,
    Products(Vec<Product>),
    /// A search with zero matches.
    NoMatches,
}

/// What the grid region shows right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridView<'a> {
    Empty,
    Page(&'a [Product]),
    NoMatches,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Storefront {
    catalog: Catalog,
    view: CatalogView,
    current_page: u32,
    paginator: Paginator,
    cart: Cart,
    popup: DetailPopup,
    status: LoadStatus,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(&StorefrontConfig::default_config())
    }
}

impl Storefront {
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            catalog: Catalog::default(),
            view: CatalogView::Unpainted,
            current_page: 1,
            paginator: Paginator::new(config.page_size),
            cart: Cart::new(),
            popup: DetailPopup::default(),
            status: LoadStatus::Loading,
        }
    }

    /// Install the result of the catalog request.
    ///
    /// Success replaces the catalog and paints the unfiltered list. Failure is
    /// logged and otherwise leaves the storefront empty.
    pub fn finish_load<E: Display>(&mut self, result: Result<Vec<Product>, E>) -> Redraw {
        match result {
            Ok(products) => {
                log::debug!("catalog loaded with {} products", products.len());
                self.catalog = Catalog::new(products);
                self.view = CatalogView::Products(self.catalog.products().to_vec());
                self.status = LoadStatus::Ready;
                Redraw::products()
            }
            Err(err) => {
                log::error!("Failed to fetch products: {err}");
                self.status = LoadStatus::Failed(err.to_string());
                Redraw::none()
            }
        }
    }

    /// Load synchronously from `source`, with the same failure handling as [`Self::finish_load`].
    pub fn load_from<S: CatalogSource>(&mut self, source: &S) -> Redraw {
        self.finish_load(source.load_catalog())
    }

    pub fn apply(&mut self, event: StoreEvent) -> Redraw {
        log::debug!("storefront event: {event:?}");
        match event {
            StoreEvent::Search(query) => self.search(&query),
            StoreEvent::SelectCategory(category) => self.select_category(&category),
            StoreEvent::Sort(mode) => self.sort(mode),
            StoreEvent::GoToPage(page) => self.go_to_page(page),
            StoreEvent::PreviousPage => self.previous_page(),
            StoreEvent::NextPage => self.next_page(),
            StoreEvent::AddToCart { product_id } => self.add_to_cart(&product_id),
            StoreEvent::RemoveLine(id) => {
                if self.cart.remove_line(id).is_some() {
                    Redraw::cart()
                } else {
                    Redraw::none()
                }
            }
            StoreEvent::RemoveAt(index) => {
                if self.cart.remove_item(index).is_some() {
                    Redraw::cart()
                } else {
                    Redraw::none()
                }
            }
            StoreEvent::OpenDetail { product_id } => match self.lookup(&product_id).cloned() {
                Some(product) => {
                    self.popup.open(&product);
                    Redraw::popup()
                }
                None => Redraw::none(),
            },
            StoreEvent::CloseDetail => {
                self.popup.close();
                Redraw::popup()
            }
        }
    }

    fn search(&mut self, query: &SearchQuery) -> Redraw {
        let matches = filter_by_search(self.catalog.products(), query);
        self.view = if matches.is_empty() {
            CatalogView::NoMatches
        } else {
            CatalogView::Products(matches)
        };
        Redraw::products()
    }

    fn select_category(&mut self, category: &str) -> Redraw {
        self.view = CatalogView::Products(filter_by_category(self.catalog.products(), category));
        Redraw::products()
    }

    fn sort(&mut self, mode: SortMode) -> Redraw {
        self.view = CatalogView::Products(sort_by_price(self.catalog.products(), mode));
        Redraw::products()
    }

    fn go_to_page(&mut self, page: u32) -> Redraw {
        if page == 0 || !matches!(self.view, CatalogView::Products(_)) {
            return Redraw::none();
        }
        self.current_page = page;
        log::debug!("page -> {page}");
        Redraw::products()
    }

    fn previous_page(&mut self) -> Redraw {
        match self.page_controls() {
            Some(controls) if !controls.previous_disabled => {
                self.go_to_page(self.current_page.saturating_sub(1))
            }
            _ => Redraw::none(),
        }
    }

    fn next_page(&mut self) -> Redraw {
        match self.page_controls() {
            Some(controls) if !controls.next_disabled => {
                self.go_to_page(self.current_page.saturating_add(1))
            }
            _ => Redraw::none(),
        }
    }

    fn add_to_cart(&mut self, product_id: &str) -> Redraw {
        let Some(product) = self.lookup(product_id) else {
            log::debug!("add to cart ignored for unknown product {product_id}");
            return Redraw::none();
        };
        let (title, price) = (product.title.clone(), product.price);
        self.cart.add_to_cart(&title, price);
        Redraw::cart()
    }

    /// Rendered rows come from the current view, so look there first.
    fn lookup(&self, product_id: &str) -> Option<&Product> {
        let in_view = match &self.view {
            CatalogView::Products(products) => products.iter().find(|p| p.id == product_id),
            CatalogView::Unpainted | CatalogView::NoMatches => None,
        };
        in_view.or_else(|| self.catalog.find(product_id))
    }

    #[must_use]
    pub fn grid(&self) -> GridView<'_> {
        match &self.view {
            CatalogView::Unpainted => GridView::Empty,
            CatalogView::NoMatches => GridView::NoMatches,
            CatalogView::Products(products) => {
                GridView::Page(self.paginator.page(products, self.current_page))
            }
        }
    }

    /// Pagination controls, or `None` when the region is empty.
    #[must_use]
    pub fn page_controls(&self) -> Option<PageControls> {
        match &self.view {
            CatalogView::Products(products) => {
                Some(self.paginator.controls(products.len(), self.current_page))
            }
            CatalogView::Unpainted | CatalogView::NoMatches => None,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn view(&self) -> &CatalogView {
        &self.view
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn popup(&self) -> &DetailPopup {
        &self.popup
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }
}
