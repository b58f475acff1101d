//! User interactions as data, dispatched to [`crate::Storefront::apply`].
use crate::cart::LineId;
use crate::filter::{SearchQuery, SortMode};

/// One user interaction.
///
/// Row-level actions carry an identifier for the row they were rendered with
/// rather than capturing positions at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// "Apply filter": text query plus price bounds.
    Search(SearchQuery),
    /// Category dropdown changed; empty means all categories.
    SelectCategory(String),
    /// Sort dropdown changed.
    Sort(SortMode),
    /// Numbered page button (1-based).
    GoToPage(u32),
    PreviousPage,
    NextPage,
    AddToCart { product_id: String },
    /// Remove button on a cart row.
    RemoveLine(LineId),
    /// Remove by current cart position.
    RemoveAt(usize),
    OpenDetail { product_id: String },
    CloseDetail,
}

/// Regions that need repainting after an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Redraw {
    pub grid: bool,
    pub pagination: bool,
    pub cart_lines: bool,
    pub cart_summary: bool,
    pub popup: bool,
}

impl Redraw {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            grid: false,
            pagination: false,
            cart_lines: false,
            cart_summary: false,
            popup: false,
        }
    }

    /// Product grid and pagination controls.
    #[must_use]
    pub const fn products() -> Self {
        Self {
            grid: true,
            pagination: true,
            ..Self::none()
        }
    }

    /// Cart line items and the totals.
    #[must_use]
    pub const fn cart() -> Self {
        Self {
            cart_lines: true,
            cart_summary: true,
            ..Self::none()
        }
    }

    #[must_use]
    pub const fn popup() -> Self {
        Self {
            popup: true,
            ..Self::none()
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.grid || self.pagination || self.cart_lines || self.cart_summary || self.popup)
    }
}
