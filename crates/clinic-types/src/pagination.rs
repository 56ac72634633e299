//! Page selection for list endpoints.
//!
//! Pages are 1-based: `page = 1` is the first page. A page past the end of the result set is
//! not an error; it simply selects nothing.

/// Errors raised when a requested page cannot be served.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("itemsPerPage must be at least 1")]
    ZeroItemsPerPage,
    #[error("itemsPerPage must not exceed {max}, got {requested}")]
    ItemsPerPageTooLarge { max: u32, requested: u32 },
    #[error("page numbers start at 1")]
    ZeroPage,
}

/// A validated page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    items_per_page: u32,
    page: u32,
}

impl Pagination {
    /// Validates an `itemsPerPage`/`page` pair against the configured page-size cap.
    ///
    /// # Errors
    ///
    /// Returns a [`PaginationError`] if either value is zero or `items_per_page` exceeds
    /// `max_items_per_page`.
    pub fn new(items_per_page: u32, page: u32, max_items_per_page: u32) -> Result<Self, PaginationError> {
        if items_per_page == 0 {
            return Err(PaginationError::ZeroItemsPerPage);
        }
        if items_per_page > max_items_per_page {
            return Err(PaginationError::ItemsPerPageTooLarge {
                max: max_items_per_page,
                requested: items_per_page,
            });
        }
        if page == 0 {
            return Err(PaginationError::ZeroPage);
        }

        Ok(Self {
            items_per_page,
            page,
        })
    }

    /// Number of matching items that precede this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.items_per_page as usize)
    }

    /// Returns the `total` count and the items that fall on this page, in input order.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> (u64, Vec<T>) {
        let mut total = 0u64;
        let mut page_items = Vec::with_capacity(self.items_per_page as usize);
        let offset = self.offset();

        for (index, item) in items.into_iter().enumerate() {
            total += 1;
            if index >= offset && page_items.len() < self.items_per_page as usize {
                page_items.push(item);
            }
        }

        (total, page_items)
    }
}
