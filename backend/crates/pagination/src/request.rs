//! Validated page-number requests.

use thiserror::Error;

/// Errors raised when constructing a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page numbers are one-based.
    #[error("page must be greater than zero")]
    ZeroPage,
    /// A page must hold at least one record.
    #[error("limit must be greater than zero")]
    ZeroLimit,
}

/// One-based page number paired with a page size.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::new(3, 10).expect("valid request");
/// assert_eq!(request.offset(), Some(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Validate and construct a page request.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] when either value is zero.
    pub const fn new(page: u64, limit: u64) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        if limit == 0 {
            return Err(PageRequestError::ZeroLimit);
        }
        Ok(Self { page, limit })
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Maximum number of records on the page.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Index of the first record on the page, or `None` when it does not fit
    /// in `usize`.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        let offset = (self.page - 1).checked_mul(self.limit)?;
        usize::try_from(offset).ok()
    }

    /// Borrow the records covered by this page.
    ///
    /// Returns `None` when the page starts at or beyond the end of `items`,
    /// including when `items` is empty. The last page may be shorter than
    /// [`Self::limit`].
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let items: Vec<u32> = (1..=25).collect();
    /// let page = PageRequest::new(3, 10).expect("valid request");
    /// assert_eq!(page.slice(&items), Some(&items[20..]));
    /// assert!(PageRequest::new(4, 10).expect("valid").slice(&items).is_none());
    /// ```
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> Option<&'a [T]> {
        let start = self.offset()?;
        if start >= items.len() {
            return None;
        }
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        let end = start.saturating_add(limit).min(items.len());
        items.get(start..end)
    }
}
