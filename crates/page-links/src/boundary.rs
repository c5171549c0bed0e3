/// Index of the last page, or `None` when `page_size == 0` (unpaged).
///
/// `total == 0` yields `Some(0)`: no valid page exists, which callers must not
/// read as "page zero is valid".
pub fn last_page(page_size: u64, total: u64) -> Option<u64> {
    (page_size > 0).then(|| total.div_ceil(page_size))
}
