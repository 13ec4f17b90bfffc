//! Pagination stage (pure).
//!
//! Windows the filtered list into fixed-size pages. Page numbers are 1-based
//! and there is always at least one page, even for an empty list.

use serde::{Deserialize, Deserializer};
use std::num::NonZeroUsize;
use std::ops::Range;
use thiserror::Error;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ===== PageSize =====

/// Rows per page. Positive, fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Smart constructor: returns None for zero.
    pub fn new(rows: usize) -> Option<Self> {
        NonZeroUsize::new(rows).map(Self)
    }

    /// Rows per page.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(DEFAULT_PAGE_SIZE - 1))
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = usize::deserialize(deserializer)?;
        PageSize::new(rows).ok_or_else(|| serde::de::Error::custom("page size must be at least 1"))
    }
}

// ===== PageNumber =====

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(NonZeroUsize::MIN);

    /// Smart constructor: returns None for zero.
    pub fn new(page: usize) -> Option<Self> {
        NonZeroUsize::new(page).map(Self)
    }

    /// The page number as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

// ===== Errors =====

/// A page change request outside `1..=total_pages`.
///
/// Callers recover by leaving the current page unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Page {requested} is outside 1..={total_pages}")]
pub struct InvalidPageRequest {
    /// The page that was asked for.
    pub requested: usize,
    /// Page count at the time of the request.
    pub total_pages: usize,
}

// ===== Page =====

/// The visible window of a paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, at most `page_size` long.
    pub items: &'a [T],
    /// Which page this is.
    pub number: PageNumber,
    /// Page count for the whole list (at least 1).
    pub total_pages: usize,
    /// Offset of the first item within the whole list.
    pub start: usize,
}

// ===== Operations =====

/// Number of pages for `len` items. Never less than 1.
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Index range of `page` within a list of `len` items, clipped to the list.
pub fn page_bounds(len: usize, page_size: PageSize, page: PageNumber) -> Range<usize> {
    let start = (page.get() - 1).saturating_mul(page_size.get()).min(len);
    let end = start.saturating_add(page_size.get()).min(len);
    start..end
}

/// Slice out the requested page.
///
/// A page past the end yields an empty slice rather than an error; the final
/// page may be shorter than `page_size`.
pub fn paginate<T>(items: &[T], page_size: PageSize, page: PageNumber) -> Page<'_, T> {
    let bounds = page_bounds(items.len(), page_size, page);
    Page {
        start: bounds.start,
        items: &items[bounds],
        number: page,
        total_pages: total_pages(items.len(), page_size),
    }
}

/// Validate a page change request against the current page count.
///
/// # Errors
///
/// Returns `InvalidPageRequest` if `requested` is 0 or above `total_pages`.
pub fn validate_page_request(
    requested: usize,
    total_pages: usize,
) -> Result<PageNumber, InvalidPageRequest> {
    match PageNumber::new(requested) {
        Some(page) if requested <= total_pages => Ok(page),
        _ => Err(InvalidPageRequest {
            requested,
            total_pages,
        }),
    }
}

// ===== Tests =====
