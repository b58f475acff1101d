//! Fixed-size paging over a product sequence and the navigation control model.
use serde::Serialize;

/// Products per page in the storefront grid.
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Paginator {
    /// A zero page size is treated as one item per page.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { 1 } else { page_size },
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn total_pages(&self, len: usize) -> u32 {
        u32::try_from(len.div_ceil(self.page_size)).unwrap_or(u32::MAX)
    }

    /// Items on the 1-based `page`. Pages outside the sequence yield an empty slice.
    #[must_use]
    pub fn page<'a, T>(&self, items: &'a [T], page: u32) -> &'a [T] {
        let Some(index) = usize::try_from(page).ok().and_then(|p| p.checked_sub(1)) else {
            return &[];
        };
        let start = index.saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }

    #[must_use]
    pub fn controls(&self, len: usize, current_page: u32) -> PageControls {
        PageControls::new(current_page, self.total_pages(len))
    }
}

/// One numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: u32,
    pub current: bool,
}

/// Everything the pagination region shows: Previous, numbered pages, Next and the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current_page: u32,
    pub total_pages: u32,
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub pages: Vec<PageButton>,
}

impl PageControls {
    /// Disabled states compare for equality only, so a stale page beyond the
    /// last one keeps "Next" enabled.
    #[must_use]
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let pages = (1..=total_pages)
            .map(|number| PageButton {
                number,
                current: number == current_page,
            })
            .collect();
        Self {
            current_page,
            total_pages,
            previous_disabled: current_page == 1,
            next_disabled: current_page == total_pages,
            pages,
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}
