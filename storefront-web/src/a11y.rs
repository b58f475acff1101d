// Accessibility helpers

/// Id of the polite live region that announces cart changes.
pub const CART_STATUS_ID: &str = "cart-status";

/// Update the live region status for screen readers
///
/// Updates the text content of the #cart-status element if present.
/// This provides announcements to assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CART_STATUS_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Announcement after a product lands in the cart.
#[must_use]
pub fn added_message(title: &str) -> String {
    format!("{title} added to cart")
}

#[must_use]
pub fn removed_message(title: &str) -> String {
    format!("{title} removed from cart")
}
