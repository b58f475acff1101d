use futures::executor::block_on;
use storefront_core::{
    CartSummary as Totals, JsonCatalog, Paginator, PopupContent, StoreEvent, Storefront,
};
use storefront_web::app::App;
use storefront_web::app::view::{StorefrontView, StorefrontViewProps};
use storefront_web::components::cart_summary::{CartSummary, CartSummaryProps};
use storefront_web::components::detail_popup::{DetailPopup, DetailPopupProps};
use storefront_web::components::filter_bar::{FilterBar, FilterBarProps};
use storefront_web::components::pagination::{Pagination, PaginationProps};
use storefront_web::components::product_grid::{GridContent, ProductGrid, ProductGridProps};
use yew::{Callback, LocalServerRenderer};

const FIXTURE: &str = include_str!("../../storefront-core/fixtures/products.json");

fn loaded_store() -> Storefront {
    let mut store = Storefront::default();
    store.load_from(&JsonCatalog::new(FIXTURE));
    store
}

fn render_view(store: Storefront) -> String {
    let props = StorefrontViewProps {
        store,
        on_event: Callback::noop(),
    };
    block_on(LocalServerRenderer::<StorefrontView>::with_props(props).render())
}

#[test]
fn app_renders_every_region_before_the_catalog_arrives() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    for id in [
        "product-container",
        "pagination-controls",
        "cart-items",
        "totalQuantity",
        "totalPrice",
        "productSearch",
        "minPrice",
        "maxPrice",
        "category",
        "sorting",
        "apply-filter",
        "popup",
        "cart-status",
    ] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
    assert!(!html.contains("class=\"card\""));
    assert!(html.contains("Total Quantity: 0"));
}

#[test]
fn loaded_view_shows_first_page_of_cards() {
    let html = render_view(loaded_store());
    assert_eq!(html.matches("class=\"card\"").count(), 6);
    assert!(html.contains("Page 1 of 3"));
    assert!(html.contains("$109.95"));
    assert!(html.contains("View Details"));
    assert!(html.contains("Add to Cart"));
}

#[test]
fn filter_bar_lists_catalog_categories() {
    let store = loaded_store();
    let props = FilterBarProps {
        categories: store.catalog().categories(),
        on_event: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FilterBar>::with_props(props).render());
    assert!(html.contains("All Categories"));
    assert!(html.contains("electronics"));
    assert!(html.contains("jewelery"));
    assert!(html.contains("value=\"Min\""));
    assert!(html.contains("value=\"Max\""));
}

#[test]
fn empty_search_shows_the_no_products_message() {
    let mut store = loaded_store();
    store.apply(StoreEvent::Search(storefront_core::SearchQuery::from_inputs(
        "zzz-not-a-product",
        "",
        "",
    )));
    let html = render_view(store);
    assert!(html.contains("No products found."));
    assert!(!html.contains("page-info"));
}

#[test]
fn grid_renders_nothing_until_painted() {
    let props = ProductGridProps {
        content: GridContent::Empty,
        on_event: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProductGrid>::with_props(props).render());
    assert!(html.contains("product-container"));
    assert!(!html.contains("No products found."));
}

#[test]
fn pagination_marks_the_current_page() {
    let controls = Paginator::default().controls(13, 2);
    let props = PaginationProps {
        controls: Some(controls),
        on_event: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Pagination>::with_props(props).render());
    assert_eq!(html.matches("page-button").count(), 3);
    assert!(html.contains("aria-current=\"page\""));
    assert!(html.contains("Page 2 of 3"));
}

#[test]
fn cart_regions_follow_cart_contents() {
    let mut store = loaded_store();
    for id in ["1", "1", "7"] {
        store.apply(StoreEvent::AddToCart {
            product_id: id.to_string(),
        });
    }
    let html = render_view(store);
    assert!(html.contains("Total Quantity: 3"));
    assert!(html.contains("Total Price: $229.89"));
    assert!(html.contains("x 2 - $219.90"));
    assert_eq!(html.matches("delete-button").count(), 2);
}

#[test]
fn cart_summary_defaults_to_zero() {
    let props = CartSummaryProps {
        summary: Totals::default(),
    };
    let html = block_on(LocalServerRenderer::<CartSummary>::with_props(props).render());
    assert!(html.contains("Total Quantity: 0"));
    assert!(html.contains("Total Price: $0.00"));
}

#[test]
fn popup_is_hidden_until_opened() {
    let closed = DetailPopupProps {
        content: None,
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DetailPopup>::with_props(closed).render());
    assert!(html.contains("popup hidden"));

    let open = DetailPopupProps {
        content: Some(PopupContent {
            title: "Desk Lamp".to_string(),
            description: "Warm light".to_string(),
            price: "Price: $12.5".to_string(),
            image: "lamp.png".to_string(),
        }),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DetailPopup>::with_props(open).render());
    assert!(!html.contains("popup hidden"));
    assert!(html.contains("Desk Lamp"));
    assert!(html.contains("Price: $12.5"));
    assert!(html.contains("lamp.png"));
}

#[test]
fn opened_detail_reaches_the_popup_region() {
    let mut store = loaded_store();
    store.apply(StoreEvent::OpenDetail {
        product_id: "9".to_string(),
    });
    let html = render_view(store);
    assert!(!html.contains("popup hidden"));
    assert!(html.contains("Price: $64"));
}
