//! axum glue: envelopes and errors as responses, links from the request URI.

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response as AxumResponse};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::errors::LinkError;
use crate::params::PageSpec;
use crate::response::{ListResponse, Response};

/// Build a [`ListResponse`] from the request URI's path and query, still
/// percent-escaped as received.
pub fn list_response_from_uri<T>(
    items: T,
    uri: &Uri,
    total: u64,
    spec: PageSpec,
) -> Result<ListResponse<T>, LinkError> {
    let path = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    ListResponse::build(items, path, total, spec.number, spec.size)
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> AxumResponse {
        Json(self).into_response()
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        Json(self).into_response()
    }
}

impl IntoResponse for LinkError {
    fn into_response(self) -> AxumResponse {
        let msg = self.to_string();
        warn!(error = %msg, "cannot build page links");
        (StatusCode::BAD_REQUEST, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_path_and_query_from_uri() {
        let uri: Uri = "/items?sort=name&page%5Bnumber%5D=2".parse().unwrap();
        let resp = list_response_from_uri((), &uri, 25, PageSpec { number: 2, size: 10 }).unwrap();
        assert_eq!(resp.links.next.as_deref(), Some("/items?sort=name&page[number]=3"));
        assert_eq!(resp.links.prev.as_deref(), Some("/items?sort=name&page[number]=1"));
    }

    #[test]
    fn decoding_error_maps_to_bad_request() {
        let uri: Uri = "/items?q=%zz".parse().unwrap();
        let err = list_response_from_uri((), &uri, 0, PageSpec { number: 1, size: 10 }).unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
