//! Serialised pagination metadata and the response envelope wrapping it.

use serde::{Deserialize, Serialize};

use crate::PageRequest;

/// Metadata describing which slice of an ordered collection was returned.
///
/// `nextPage` is capped at `totalPages`; `prevPage` is `null` on the first
/// page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Number of records in the whole collection.
    pub total_records: u64,
    /// One-based page number that was served.
    pub current_page: u64,
    /// Number of pages at the requested page size.
    pub total_pages: u64,
    /// Page following the current one, capped at the last page.
    pub next_page: u64,
    /// Page preceding the current one, if any.
    pub prev_page: Option<u64>,
}

impl Pagination {
    /// Compute pagination metadata for `request` over `total_records`.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, Pagination};
    ///
    /// let request = PageRequest::new(3, 10).expect("valid request");
    /// let pagination = Pagination::for_request(request, 25);
    /// assert_eq!(pagination.total_pages, 3);
    /// assert_eq!(pagination.next_page, 3);
    /// assert_eq!(pagination.prev_page, Some(2));
    /// ```
    #[must_use]
    pub fn for_request(request: PageRequest, total_records: usize) -> Self {
        let total_records = u64::try_from(total_records).unwrap_or(u64::MAX);
        let total_pages = total_records.div_ceil(request.limit());
        let page = request.page();
        Self {
            total_records,
            current_page: page,
            total_pages,
            next_page: page.saturating_add(1).min(total_pages),
            prev_page: page.checked_sub(1).filter(|prev| *prev > 0),
        }
    }
}

/// A page of records together with its [`Pagination`] metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Records on the requested page, in collection order.
    pub data: Vec<T>,
    /// Metadata describing the page.
    pub pagination: Pagination,
}

impl<T: Clone> Paginated<T> {
    /// Slice `items` according to `request`.
    ///
    /// Returns `None` when the page lies beyond the collection.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, Paginated};
    ///
    /// let items = vec!["a", "b", "c"];
    /// let request = PageRequest::new(2, 2).expect("valid request");
    /// let page = Paginated::from_slice(&items, request).expect("in range");
    /// assert_eq!(page.data, vec!["c"]);
    /// assert_eq!(page.pagination.total_pages, 2);
    /// ```
    #[must_use]
    pub fn from_slice(items: &[T], request: PageRequest) -> Option<Self> {
        let data = request.slice(items)?.to_vec();
        Some(Self {
            data,
            pagination: Pagination::for_request(request, items.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for pagination metadata.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn request(page: u64, limit: u64) -> PageRequest {
        PageRequest::new(page, limit).expect("valid request")
    }

    #[rstest]
    #[case(25, 10, 3)]
    #[case(30, 10, 3)]
    #[case(31, 10, 4)]
    #[case(1, 10, 1)]
    #[case(7, 1, 7)]
    fn total_pages_is_ceiling_division(
        #[case] total: usize,
        #[case] limit: u64,
        #[case] expected: u64,
    ) {
        let pagination = Pagination::for_request(request(1, limit), total);

        assert_eq!(pagination.total_pages, expected);
    }

    #[rstest]
    #[case(1, 2, None)]
    #[case(2, 3, Some(1))]
    #[case(3, 3, Some(2))]
    fn neighbours_are_computed_from_current_page(
        #[case] page: u64,
        #[case] next: u64,
        #[case] prev: Option<u64>,
    ) {
        let pagination = Pagination::for_request(request(page, 10), 25);

        assert_eq!(pagination.current_page, page);
        assert_eq!(pagination.next_page, next);
        assert_eq!(pagination.prev_page, prev);
    }

    #[rstest]
    fn serialises_with_camel_case_keys() {
        let pagination = Pagination::for_request(request(1, 10), 25);

        let value = serde_json::to_value(pagination).expect("serialise pagination");

        assert_eq!(
            value,
            json!({
                "totalRecords": 25,
                "currentPage": 1,
                "totalPages": 3,
                "nextPage": 2,
                "prevPage": null,
            })
        );
    }

    #[rstest]
    fn last_page_is_short() {
        let items: Vec<u32> = (0..25).collect();

        let page = Paginated::from_slice(&items, request(3, 10)).expect("page in range");

        assert_eq!(page.data, vec![20, 21, 22, 23, 24]);
        assert_eq!(page.pagination.total_records, 25);
    }

    #[rstest]
    fn pages_beyond_the_end_are_rejected() {
        let items: Vec<u32> = (0..25).collect();

        assert!(Paginated::from_slice(&items, request(4, 10)).is_none());
    }
}
