//! Shopping cart keyed by product title.
use crate::format::fixed2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a cart row, assigned when the row is first created.
///
/// Only used to address rows from rendered controls; it plays no part in
/// deduplication, which is by title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(u64);

impl LineId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A line item in the shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: LineId,
    pub title: String,
    /// Unit price captured on first add.
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// `Shirt x 2 - $20.00`
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} x {} - ${}",
            self.title,
            self.quantity,
            fixed2(self.line_total())
        )
    }
}

/// What an add did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Appended(LineId),
    Incremented { id: LineId, quantity: u32 },
}

/// Shopping cart state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_id: u64,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Find a cart line by exact title.
    #[must_use]
    pub fn find_line(&self, title: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.title == title)
    }

    fn find_line_mut(&mut self, title: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.title == title)
    }

    /// Add one unit of `title`.
    ///
    /// An existing line keeps the price it was created with.
    pub fn add_to_cart(&mut self, title: &str, price: f64) -> CartChange {
        if let Some(line) = self.find_line_mut(title) {
            line.quantity = line.quantity.saturating_add(1);
            log::debug!("cart: {title} quantity now {}", line.quantity);
            return CartChange::Incremented {
                id: line.id,
                quantity: line.quantity,
            };
        }
        let id = LineId(self.next_id);
        self.next_id += 1;
        self.lines.push(CartLine {
            id,
            title: title.to_string(),
            price,
            quantity: 1,
        });
        log::debug!("cart: appended {title} as line {id}");
        CartChange::Appended(id)
    }

    /// Remove the line at `index`; later lines shift down by one.
    pub fn remove_item(&mut self, index: usize) -> Option<CartLine> {
        if index >= self.lines.len() {
            return None;
        }
        let removed = self.lines.remove(index);
        log::debug!("cart: removed {} from position {index}", removed.title);
        Some(removed)
    }

    /// Remove the line with the given row id.
    pub fn remove_line(&mut self, id: LineId) -> Option<CartLine> {
        let index = self.position(id)?;
        self.remove_item(index)
    }

    #[must_use]
    pub fn position(&self, id: LineId) -> Option<usize> {
        self.lines.iter().position(|line| line.id == id)
    }

    /// Clear the entire cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_quantity: self.lines.iter().map(|line| u64::from(line.quantity)).sum(),
            total_price: self.lines.iter().map(CartLine::line_total).sum(),
        }
    }
}

/// Totals shown under the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CartSummary {
    pub total_quantity: u64,
    pub total_price: f64,
}

impl CartSummary {
    #[must_use]
    pub fn quantity_label(&self) -> String {
        format!("Total Quantity: {}", self.total_quantity)
    }

    #[must_use]
    pub fn price_label(&self) -> String {
        format!("Total Price: ${}", fixed2(self.total_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_add_aggregates_into_one_line() {
        let mut cart = Cart::new();
        assert!(matches!(cart.add_to_cart("Shirt", 10.0), CartChange::Appended(_)));
        assert!(matches!(
            cart.add_to_cart("Shirt", 10.0),
            CartChange::Incremented { quantity: 2, .. }
        ));
        assert_eq!(cart.lines().len(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.title, "Shirt");
        assert!((line.price - 10.0).abs() < f64::EPSILON);
        assert_eq!(line.quantity, 2);

        let summary = cart.summary();
        assert_eq!(summary.total_quantity, 2);
        assert_eq!(summary.quantity_label(), "Total Quantity: 2");
        assert_eq!(summary.price_label(), "Total Price: $20.00");
    }

    #[test]
    fn repeat_add_keeps_the_first_price() {
        let mut cart = Cart::new();
        cart.add_to_cart("Shirt", 10.0);
        cart.add_to_cart("Shirt", 99.0);
        let line = cart.find_line("Shirt").expect("line exists");
        assert_eq!(line.quantity, 2);
        assert!((line.price - 10.0).abs() < f64::EPSILON);
        assert_eq!(cart.summary().price_label(), "Total Price: $20.00");
    }

    #[test]
    fn titles_match_exactly() {
        let mut cart = Cart::new();
        cart.add_to_cart("Shirt", 10.0);
        cart.add_to_cart("shirt", 10.0);
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn remove_item_shifts_later_lines() {
        let mut cart = Cart::new();
        cart.add_to_cart("Shirt", 10.0);
        cart.add_to_cart("Hat", 5.5);
        cart.add_to_cart("Hat", 5.5);

        let removed = cart.remove_item(0).expect("first line removed");
        assert_eq!(removed.title, "Shirt");
        assert_eq!(cart.lines()[0].title, "Hat");
        let summary = cart.summary();
        assert_eq!(summary.total_quantity, 2);
        assert_eq!(summary.price_label(), "Total Price: $11.00");
        assert!(cart.remove_item(5).is_none());
    }

    #[test]
    fn remove_line_uses_stable_ids() {
        let mut cart = Cart::new();
        let CartChange::Appended(first) = cart.add_to_cart("A", 1.0) else {
            panic!("expected append");
        };
        let CartChange::Appended(second) = cart.add_to_cart("B", 2.0) else {
            panic!("expected append");
        };
        let CartChange::Appended(third) = cart.add_to_cart("C", 3.0) else {
            panic!("expected append");
        };
        cart.remove_line(first);
        // `third` sat at position 2 before the first removal.
        assert_eq!(cart.remove_line(third).map(|l| l.title), Some("C".to_string()));
        assert_eq!(cart.position(second), Some(0));
        assert!(cart.remove_line(first).is_none());
    }

    #[test]
    fn line_label_formats_line_total() {
        let mut cart = Cart::new();
        cart.add_to_cart("Backpack", 109.95);
        cart.add_to_cart("Backpack", 109.95);
        assert_eq!(cart.lines()[0].label(), "Backpack x 2 - $219.90");
    }

    #[test]
    fn half_cent_totals_round_up() {
        let mut cart = Cart::new();
        cart.add_to_cart("Coin", 10.125);
        assert_eq!(cart.summary().price_label(), "Total Price: $10.13");
        assert_eq!(cart.lines()[0].label(), "Coin x 1 - $10.13");
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut cart = Cart::new();
        let first = cart.add_to_cart("A", 1.0);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.summary(), CartSummary::default());
        let second = cart.add_to_cart("A", 1.0);
        assert_ne!(first, second);
    }
}
