//! Page selection as sent by clients: `page[number]` and `page[size]`.

use configs::PaginationConfig;
use serde::Deserialize;

/// Raw query parameters, e.g. extracted with `axum::extract::Query`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageParams {
    #[serde(rename = "page[number]", default)]
    pub number: Option<u64>,
    #[serde(rename = "page[size]", default)]
    pub size: Option<u64>,
}

/// A resolved page request. `size == 0` means unpaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub number: u64,
    pub size: u64,
}

impl PageParams {
    /// Fill gaps from `config`. The number defaults to 1 and is otherwise
    /// passed through; link building handles out-of-range pages. A non-zero
    /// size is capped at `max_page_size` when that is set.
    pub fn resolve(&self, config: &PaginationConfig) -> PageSpec {
        let size = match self.size {
            None => config.default_page_size,
            Some(0) => 0,
            Some(size) if config.max_page_size > 0 => size.min(config.max_page_size),
            Some(size) => size,
        };
        PageSpec { number: self.number.unwrap_or(1), size }
    }
}

impl PageSpec {
    pub fn is_unpaged(&self) -> bool {
        self.size == 0
    }

    /// Items to skip before this page.
    pub fn offset(&self) -> u64 {
        self.number.saturating_sub(1).saturating_mul(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PaginationConfig {
        PaginationConfig { default_page_size: 20, max_page_size: 100 }
    }

    #[test]
    fn missing_params_use_defaults() {
        let spec = PageParams::default().resolve(&config());
        assert_eq!(spec, PageSpec { number: 1, size: 20 });
        assert_eq!(spec.offset(), 0);
    }

    #[test]
    fn oversized_page_is_capped() {
        let spec = PageParams { number: Some(3), size: Some(1000) }.resolve(&config());
        assert_eq!(spec, PageSpec { number: 3, size: 100 });
        assert_eq!(spec.offset(), 200);
    }

    #[test]
    fn zero_size_stays_unpaged() {
        let spec = PageParams { number: None, size: Some(0) }.resolve(&config());
        assert!(spec.is_unpaged());
        assert_eq!(spec.offset(), 0);
    }

    #[test]
    fn no_cap_when_max_is_zero() {
        let cfg = PaginationConfig { default_page_size: 0, max_page_size: 0 };
        assert_eq!(PageParams { number: Some(2), size: Some(5000) }.resolve(&cfg).size, 5000);
        assert!(PageParams::default().resolve(&cfg).is_unpaged());
    }

    #[test]
    fn page_zero_is_passed_through() {
        let spec = PageParams { number: Some(0), size: Some(10) }.resolve(&config());
        assert_eq!(spec.number, 0);
        assert_eq!(spec.offset(), 0);
    }

    #[test]
    fn offset_saturates() {
        let spec = PageSpec { number: u64::MAX, size: u64::MAX };
        assert_eq!(spec.offset(), u64::MAX);
    }

    #[test]
    fn deserializes_bracketed_keys() {
        let params: PageParams =
            serde_json::from_value(serde_json::json!({"page[number]": 4, "page[size]": 25})).unwrap();
        assert_eq!(params, PageParams { number: Some(4), size: Some(25) });
    }
}
