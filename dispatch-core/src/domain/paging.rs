//! Paging metadata for listing responses

use serde::{Deserialize, Serialize};

/// Describes one page of a listing
///
/// `offset` is the index of the first item on this page, `count` the number
/// of items actually returned, `max` the requested page size and `total` the
/// size of the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paging {
    pub count: i64,
    pub total: i64,
    pub max: i64,
    pub offset: i64,
}

impl Paging {
    /// Whether items exist past the end of this page
    pub fn has_more_results(&self) -> bool {
        self.total > self.offset + self.count
    }

    /// Offset of the next page; only meaningful when `has_more_results()`
    pub fn next_page_offset(&self) -> i64 {
        self.offset + self.count
    }

    /// 1-based index of this page
    pub fn pagenum(&self) -> i64 {
        if self.max < 1 {
            return 1;
        }
        self.offset.max(0) / self.max + 1
    }

    /// 1-based index of the last page
    pub fn max_pagenum(&self) -> i64 {
        if self.max < 1 {
            return 1;
        }
        ((self.total + self.max - 1) / self.max).max(1)
    }
}

impl std::fmt::Display for Paging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "page {}/{} ({} of {} results)",
            self.pagenum(),
            self.max_pagenum(),
            self.count,
            self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paging(count: i64, total: i64, max: i64, offset: i64) -> Paging {
        Paging {
            count,
            total,
            max,
            offset,
        }
    }

    #[test]
    fn test_middle_page_has_more() {
        let p = paging(10, 25, 10, 10);
        assert!(p.has_more_results());
        assert_eq!(p.next_page_offset(), 20);
        assert_eq!(p.pagenum(), 2);
        assert_eq!(p.max_pagenum(), 3);
    }

    #[test]
    fn test_last_page_has_no_more() {
        let p = paging(5, 95, 10, 90);
        assert!(!p.has_more_results());
        assert_eq!(p.pagenum(), 10);
        assert_eq!(p.max_pagenum(), 10);
    }

    #[test]
    fn test_exact_fit_has_no_more() {
        let p = paging(10, 20, 10, 10);
        assert!(!p.has_more_results());
        assert_eq!(p.max_pagenum(), 2);
    }

    #[test]
    fn test_zero_max_is_single_page() {
        let p = paging(3, 3, 0, 0);
        assert_eq!(p.pagenum(), 1);
        assert_eq!(p.max_pagenum(), 1);

        let p = paging(3, 50, -1, 20);
        assert_eq!(p.pagenum(), 1);
        assert_eq!(p.max_pagenum(), 1);
    }

    #[test]
    fn test_empty_listing() {
        let p = paging(0, 0, 20, 0);
        assert!(!p.has_more_results());
        assert_eq!(p.pagenum(), 1);
        assert_eq!(p.max_pagenum(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            paging(10, 25, 10, 10).to_string(),
            "page 2/3 (10 of 25 results)"
        );
    }
}
