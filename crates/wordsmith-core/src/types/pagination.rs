//! Pagination types for list queries.
//!
//! The request side is a zero-based page index plus a page size; the
//! response side is the metadata block the remote collaborator derives
//! from the total row count. Consumers trust the response-side `pages`
//! and never recompute it.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 25;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 200;

/// Request-side pagination descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page index (0-based).
    #[serde(default)]
    pub page: u64,
    /// Number of rows per page.
    #[serde(default = "default_page_size")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request with the size clamped to a sane range.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Index of the first row on this page.
    pub fn offset(&self) -> u64 {
        self.page * self.limit
    }

    /// Inclusive row-index bounds `(from, to)` of this page.
    ///
    /// For local slicing of client-held datasets only; the remote
    /// collaborator performs the authoritative pagination.
    pub fn bounds(&self) -> (u64, u64) {
        let from = self.offset();
        (from, from + self.limit - 1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Response-side pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page index of this response (0-based).
    pub page: u64,
    /// Total page count.
    pub pages: u64,
    /// Page size the count was computed with.
    pub size: u64,
    /// Total row count across all pages.
    pub total: u64,
}

impl PageMeta {
    /// Compute metadata for a page of a collection with `total` rows.
    ///
    /// An empty collection still has one page so that last-page
    /// arithmetic stays total.
    pub fn new(page: u64, size: u64, total: u64) -> Self {
        let size = size.max(1);
        let pages = if total == 0 {
            1
        } else {
            (total + size - 1) / size
        };
        Self {
            page,
            pages,
            size,
            total,
        }
    }

    /// Whether a page exists after this one.
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.pages
    }

    /// Whether a page exists before this one.
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Index of the last page.
    pub fn last_page(&self) -> u64 {
        self.pages.saturating_sub(1)
    }
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_bounds() {
        let req = PageRequest::new(2, 15);
        assert_eq!(req.offset(), 30);
        assert_eq!(req.bounds(), (30, 44));
    }

    #[test]
    fn test_first_page_bounds() {
        let req = PageRequest::new(0, 25);
        assert_eq!(req.bounds(), (0, 24));
    }

    #[test]
    fn test_limit_clamped() {
        assert_eq!(PageRequest::new(0, 0).limit, 1);
        assert_eq!(PageRequest::new(0, 100_000).limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_count() {
        let meta = PageMeta::new(3, 15, 47);
        assert_eq!(meta.pages, 4);
        assert_eq!(meta.size, 15);
        assert_eq!(meta.total, 47);
        assert!(!meta.has_next());
        assert!(meta.has_previous());
    }

    #[test]
    fn test_exact_multiple_page_count() {
        assert_eq!(PageMeta::new(0, 15, 45).pages, 3);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let meta = PageMeta::new(0, 25, 0);
        assert_eq!(meta.pages, 1);
        assert_eq!(meta.last_page(), 0);
        assert!(!meta.has_next());
        assert!(!meta.has_previous());
    }

    #[test]
    fn test_serde_roundtrip() {
        let meta = PageMeta::new(1, 10, 35);
        let json = serde_json::to_string(&meta).expect("serialize");
        let parsed: PageMeta = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(meta, parsed);
    }
}
