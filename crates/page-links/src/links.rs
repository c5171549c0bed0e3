use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::boundary::last_page;
use crate::rewriter::set_page_number;

/// Navigation links for one page of a collection. `None` means the link does
/// not apply and serializes as `null`, never as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub next: Option<String>,
    pub prev: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

impl PageLinks {
    /// Derive all five links from a decoded `path`.
    ///
    /// `page_size == 0` is unpaged mode: `first`, `self` and `next` are `path`
    /// unchanged and `last` is absent. Out-of-range page numbers are kept in
    /// `self` and pulled back to the last page in `prev`.
    pub fn build(path: &str, page_number: u64, page_size: u64, total: u64) -> Self {
        let last_page = last_page(page_size, total);
        trace!(path, page_number, page_size, total, ?last_page, "building page links");

        Self {
            self_link: Some(self_link(path, page_number, last_page)),
            next: next_link(path, page_number, last_page),
            prev: prev_link(path, page_number, last_page),
            first: Some(first_link(path, last_page)),
            last: last_page.map(|last| set_page_number(path, last)),
        }
    }
}

fn first_link(path: &str, last_page: Option<u64>) -> String {
    match last_page {
        None => path.to_owned(),
        Some(_) => set_page_number(path, 1),
    }
}

fn self_link(path: &str, number: u64, last_page: Option<u64>) -> String {
    match last_page {
        None => path.to_owned(),
        Some(_) => set_page_number(path, number),
    }
}

fn next_link(path: &str, number: u64, last_page: Option<u64>) -> Option<String> {
    match last_page {
        None => Some(path.to_owned()),
        Some(last) if number >= last => None,
        Some(_) => Some(set_page_number(path, number + 1)),
    }
}

// Unpaged collections have no upper bound, so only the lower one applies.
fn prev_link(path: &str, number: u64, last_page: Option<u64>) -> Option<String> {
    if number <= 1 {
        return None;
    }
    match last_page {
        Some(last) if number > last => Some(set_page_number(path, last)),
        _ => Some(set_page_number(path, number - 1)),
    }
}
