use crate::error::QueryError;

/// A validated page request: 1-indexed page and a non-zero page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Normalize raw query values.
    ///
    /// A missing page means page 1. A missing or zero page size falls back to
    /// `default_size`; sizes above `max_size` are clamped rather than
    /// rejected. Page 0 is an error.
    pub fn new(
        page: Option<u64>,
        page_size: Option<u64>,
        default_size: u64,
        max_size: u64,
    ) -> Result<Self, QueryError> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(QueryError::PageOutOfRange(page));
        }

        let page_size = match page_size {
            Some(0) | None => default_size,
            Some(size) => size,
        }
        .clamp(1, max_size.max(1));

        Ok(Self { page, page_size })
    }

    /// Rows skipped before this page, or `None` when that count overflows
    /// or does not fit a signed 64-bit SQL offset.
    pub fn offset(&self) -> Option<u64> {
        (self.page - 1)
            .checked_mul(self.page_size)
            .filter(|offset| *offset <= i64::MAX as u64)
    }
}

/// `ceil(total / page_size)`, or 0 when nothing matched.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if total == 0 || page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Fails when `page` is past the last page. An empty result set has no
/// last page, so any page is accepted there.
pub fn ensure_page_exists(page: u64, total_pages: u64) -> Result<(), QueryError> {
    if total_pages > 0 && page > total_pages {
        return Err(QueryError::InvalidPage { page, total_pages });
    }
    Ok(())
}

/// One page of rows plus the counts needed to render page metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
