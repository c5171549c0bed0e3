//! Navigational page links (`self`, `next`, `prev`, `first`, `last`) for
//! paginated list endpoints that carry the page in a `page[number]` query
//! parameter.
//!
//! The entry point is [`build_list_response`]: it percent-decodes the request
//! path, derives the five links and wraps them with the page payload.

pub mod boundary;
pub mod decode;
pub mod errors;
#[cfg(feature = "axum")]
pub mod http;
pub mod links;
pub mod params;
pub mod response;
pub mod rewriter;

pub use boundary::last_page;
pub use configs::PaginationConfig;
pub use decode::decode_path;
pub use errors::LinkError;
#[cfg(feature = "axum")]
pub use http::list_response_from_uri;
pub use links::PageLinks;
pub use params::{PageParams, PageSpec};
pub use response::{ListResponse, Response};
pub use rewriter::{page_number, set_page_number, PAGE_NUMBER_PARAM};

/// Build a list envelope for `items` with links derived from the escaped
/// request `path`. Fails only when `path` is not valid percent-encoded text.
pub fn build_list_response<T>(
    items: T,
    path: &str,
    total: u64,
    page_number: u64,
    page_size: u64,
) -> Result<ListResponse<T>, LinkError> {
    ListResponse::build(items, path, total, page_number, page_size)
}
