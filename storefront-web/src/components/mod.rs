pub mod cart_panel;
pub mod cart_summary;
pub mod detail_popup;
pub mod filter_bar;
pub mod pagination;
pub mod product_card;
pub mod product_grid;
