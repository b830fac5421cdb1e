//! Page-number pagination primitives shared by Cookbook backend endpoints.
//!
//! The crate keeps the arithmetic for slicing an ordered collection and the
//! serialised pagination envelope in one place so every paginated endpoint
//! reports the same metadata shape:
//!
//! ```json
//! {
//!   "data": [],
//!   "pagination": {
//!     "totalRecords": 25,
//!     "currentPage": 3,
//!     "totalPages": 3,
//!     "nextPage": 3,
//!     "prevPage": 2
//!   }
//! }
//! ```

mod envelope;
mod request;

pub use envelope::{Paginated, Pagination};
pub use request::{PageRequest, PageRequestError};
