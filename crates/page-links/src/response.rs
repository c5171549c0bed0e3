//! JSON envelopes: `{"data": ...}` and `{"data": ..., "links": {...}}`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decode::decode_path;
use crate::errors::LinkError;
use crate::links::PageLinks;

/// Single-resource envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: T,
}

impl<T> Response<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Collection envelope carrying one page of items and its navigation links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: T,
    pub links: PageLinks,
}

impl<T> ListResponse<T> {
    /// `path` is the escaped path as received on the request line. It is
    /// decoded before any link is built; on failure nothing is constructed.
    pub fn build(
        items: T,
        path: &str,
        total: u64,
        page_number: u64,
        page_size: u64,
    ) -> Result<Self, LinkError> {
        let path = decode_path(path).map_err(|e| {
            debug!(error = %e, path, "rejecting list path");
            e
        })?;
        Ok(Self {
            data: items,
            links: PageLinks::build(&path, page_number, page_size, total),
        })
    }
}
