//! Page-numbered pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// Default number of records per page.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Largest page size a client may ask for.
pub const MAX_PER_PAGE: u32 = 50;

/// Clamp a requested page number to at least 1.
pub fn clamp_page(page: Option<u32>) -> u32 {
    page.unwrap_or(1).max(1)
}

/// Clamp a requested page size into `1..=MAX_PER_PAGE`.
pub fn clamp_per_page(per_page: Option<u32>) -> u32 {
    per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
}

/// One page of results plus the numbers needed to render pagination controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub pages: u32,
    pub current_page: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Page<T> {
    /// Cut page `page` of size `per_page` out of the full, already ordered
    /// result set. Pages past the end are empty rather than an error.
    pub fn from_vec(all: Vec<T>, page: u32, per_page: u32) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total = all.len() as u64;
        let pages = total.div_ceil(u64::from(per_page)) as u32;
        let skip = (page as usize - 1).saturating_mul(per_page as usize);

        let items = all.into_iter().skip(skip).take(per_page as usize).collect();

        Self {
            items,
            total,
            pages,
            current_page: page,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_per_page(None), DEFAULT_PER_PAGE);
        assert_eq!(clamp_per_page(Some(0)), 1);
        assert_eq!(clamp_per_page(Some(500)), MAX_PER_PAGE);
    }

    #[test]
    fn middle_page() {
        let page = Page::from_vec((1..=7).collect::<Vec<_>>(), 2, 3);
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total, 7);
        assert_eq!(page.pages, 3);
        assert!(page.has_next);
        assert!(page.has_prev);
    }

    #[test]
    fn past_the_end_is_empty() {
        let page = Page::from_vec(vec![1, 2], 5, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.pages, 1);
        assert!(!page.has_next);
        assert!(page.has_prev);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let page: Page<i32> = Page::from_vec(Vec::new(), 1, 10);
        assert_eq!(page.pages, 0);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }
}
