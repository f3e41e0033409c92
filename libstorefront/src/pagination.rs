//! Client-side pagination over the fetched catalog
//!
//! Pages are 1-based and hold a fixed [`ITEMS_PER_PAGE`] products. Nothing
//! here validates a page number against the catalog size: a page with no
//! products is simply empty.

/// Products shown per page
pub const ITEMS_PER_PAGE: usize = 5;

/// Current page selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: ITEMS_PER_PAGE,
        }
    }
}

impl PaginationState {
    /// Slice `items` down to the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.current_page, self.items_per_page)
    }
}

/// Page buttons for a catalog of `total_items`: `1..=ceil(total / per_page)`
///
/// Returns an empty list for an empty catalog (and for a zero page size).
pub fn compute_page_numbers(total_items: usize, items_per_page: usize) -> Vec<usize> {
    if items_per_page == 0 {
        return Vec::new();
    }
    (1..=total_items.div_ceil(items_per_page)).collect()
}

/// Items on `page`, i.e. `items[(page - 1) * per_page .. page * per_page]`
/// clipped to the list bounds
///
/// Page 0 and pages past the end yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let end = page.saturating_mul(items_per_page).min(items.len());
    let start = (page - 1).saturating_mul(items_per_page).min(end);
    &items[start..end]
}
