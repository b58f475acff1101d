//! Product detail overlay.
use crate::catalog::Product;
use crate::format::js_number;
use serde::Serialize;

/// Fields shown inside the overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PopupContent {
    pub title: String,
    pub description: String,
    /// `Price: $109.95`
    pub price: String,
    pub image: String,
}

impl From<&Product> for PopupContent {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: format!("Price: ${}", js_number(product.price)),
            image: product.image.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailPopup {
    content: Option<PopupContent>,
}

impl DetailPopup {
    /// Show `product`, replacing whatever was shown before.
    pub fn open(&mut self, product: &Product) {
        self.content = Some(PopupContent::from(product));
    }

    pub fn close(&mut self) {
        self.content = None;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.content.is_some()
    }

    #[must_use]
    pub const fn content(&self) -> Option<&PopupContent> {
        self.content.as_ref()
    }
}
