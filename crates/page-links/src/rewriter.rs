//! Setting and reading the `page[number]` query parameter of a path.
//!
//! The query is parsed into `&`-separated segments and the parameter is
//! located by exact key comparison, so `xpage[number]=1` or
//! `filter=page[number]=1` are never touched. All other segments keep their
//! bytes and their order.

pub const PAGE_NUMBER_PARAM: &str = "page[number]";

/// Return `path` with `page[number]` set to `page`.
///
/// Every existing `page[number]` segment gets the new value. If there is none,
/// the parameter is appended after `?` (no or empty query) or `&`.
pub fn set_page_number(path: &str, page: u64) -> String {
    let value = page.to_string();
    let mut out = String::with_capacity(path.len() + PAGE_NUMBER_PARAM.len() + value.len() + 2);

    let (base, query) = split_query(path);
    out.push_str(base);
    out.push('?');

    match query {
        Some(query) if !query.is_empty() => {
            let mut found = false;
            for (i, segment) in query.split('&').enumerate() {
                if i > 0 {
                    out.push('&');
                }
                if segment_key(segment) == PAGE_NUMBER_PARAM {
                    found = true;
                    push_page_param(&mut out, &value);
                } else {
                    out.push_str(segment);
                }
            }
            if !found {
                out.push('&');
                push_page_param(&mut out, &value);
            }
        }
        _ => push_page_param(&mut out, &value),
    }
    out
}

/// First `page[number]` value in `path` that parses as an unsigned integer.
pub fn page_number(path: &str) -> Option<u64> {
    let (_, query) = split_query(path);
    query?
        .split('&')
        .filter_map(|segment| segment.split_once('='))
        .filter(|(key, _)| *key == PAGE_NUMBER_PARAM)
        .find_map(|(_, value)| value.parse().ok())
}

fn split_query(path: &str) -> (&str, Option<&str>) {
    match path.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (path, None),
    }
}

fn segment_key(segment: &str) -> &str {
    segment.split_once('=').map_or(segment, |(key, _)| key)
}

fn push_page_param(out: &mut String, value: &str) {
    out.push_str(PAGE_NUMBER_PARAM);
    out.push('=');
    out.push_str(value);
}
