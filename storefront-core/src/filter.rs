//! View pipeline: text + price-range search, category filter and price sort.
//!
//! Every operation reads the full product list it is given and returns a fresh
//! sequence. Nothing here composes with a previous result; the caller always
//! passes the whole catalog.
use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Inclusive price bounds for the search filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

impl PriceRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Build bounds from raw input text.
    ///
    /// A bound that is missing, unparseable or zero falls back to its default
    /// (0 for min, unbounded for max).
    #[must_use]
    pub fn from_inputs(min_raw: &str, max_raw: &str) -> Self {
        let min = parse_price_bound(min_raw)
            .filter(|v| *v != 0.0)
            .unwrap_or(0.0);
        let max = parse_price_bound(max_raw)
            .filter(|v| *v != 0.0)
            .unwrap_or(f64::INFINITY);
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Free-text query plus price bounds, as captured from the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub range: PriceRange,
}

impl SearchQuery {
    #[must_use]
    pub fn new(text: impl Into<String>, range: PriceRange) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }

    #[must_use]
    pub fn from_inputs(text: &str, min_raw: &str, max_raw: &str) -> Self {
        Self::new(text, PriceRange::from_inputs(min_raw, max_raw))
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.text.to_lowercase();
        product.title.to_lowercase().contains(&needle) && self.range.contains(product.price)
    }
}

/// Price ordering selected in the sort dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Lowest price first (`"Min"`).
    Min,
    /// Highest price first (`"Max"`).
    Max,
    #[default]
    Catalog,
}

impl SortMode {
    /// Map a dropdown value; anything other than `Min`/`Max` keeps catalog order.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "Min" => Self::Min,
            "Max" => Self::Max,
            _ => Self::Catalog,
        }
    }

    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Min => "Min",
            Self::Max => "Max",
            Self::Catalog => "",
        }
    }
}

#[must_use]
pub fn filter_by_search(products: &[Product], query: &SearchQuery) -> Vec<Product> {
    products
        .iter()
        .filter(|product| query.matches(product))
        .cloned()
        .collect()
}

/// Case-insensitive category match. An empty selection keeps everything.
#[must_use]
pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    if category.is_empty() {
        return products.to_vec();
    }
    let wanted = category.to_lowercase();
    products
        .iter()
        .filter(|product| product.category.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Stable copy of `products` ordered by price.
#[must_use]
pub fn sort_by_price(products: &[Product], mode: SortMode) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match mode {
        SortMode::Min => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::Max => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::Catalog => {}
    }
    sorted
}

/// Read the longest leading decimal number from `raw`, ignoring leading whitespace.
///
/// `"12abc"` yields 12, `".5"` yields 0.5, `"abc"` and `""` yield `None`.
#[must_use]
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse::<f64>().ok().or_else(|| {
            Some(if s.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            })
        });
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let number = s[..end].trim_end_matches('.');
    number.parse::<f64>().ok()
}
