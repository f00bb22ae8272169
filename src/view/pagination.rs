//! Paging over the table rows.
//!
//! [`total_pages`] is the only place the page count is computed. Both the
//! `next` bound and [`paginate`] go through it.

use crate::types::daily_record::DailyRecord;
use serde::Serialize;

/// Number of pages needed for `len` rows. Never less than one, so an empty
/// table still shows "page 1 of 1". A zero `page_size` counts as one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Page size and the 1-based index of the page being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page_size: usize,
    page_index: usize,
}

impl Pagination {
    /// A pagination on page 1. A zero `page_size` is raised to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page_index: 1,
        }
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The page being shown, starting at 1.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// [`total_pages`] for `len` rows at the current page size.
    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    /// Changes the page size and always goes back to page 1, even when the
    /// current page would still exist under the new size.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 1;
    }

    /// Back to page 1, keeping the page size.
    pub fn reset(&mut self) {
        self.page_index = 1;
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    /// Whether a page after the current one exists.
    ///
    /// # Arguments
    ///
    /// * `total_pages` - Page count as returned by [`total_pages`].
    pub fn has_next(&self, total_pages: usize) -> bool {
        self.page_index < total_pages
    }

    /// Moves one page back. No-op on page 1. Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Moves one page forward. No-op on the last page. Returns whether the page changed.
    pub fn next(&mut self, total_pages: usize) -> bool {
        if !self.has_next(total_pages) {
            return false;
        }
        self.page_index += 1;
        true
    }

    /// Jumps to `page_index`, clamped to `1..=total_pages`.
    pub fn go_to(&mut self, page_index: usize, total_pages: usize) {
        self.page_index = page_index.clamp(1, total_pages.max(1));
    }
}

/// One page of table rows plus the numbers needed to draw the pager.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    pub rows: &'a [DailyRecord],
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl Page<'_> {
    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}

/// Slices the page selected by `pagination` out of `rows`.
///
/// Total: an index past the last page gives an empty slice rather than an
/// error, and an empty input gives an empty page 1 of 1.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weather_panel::{paginate, DailyRecord, Pagination};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let rows: Vec<DailyRecord> = start
///     .iter_days()
///     .take(25)
///     .map(DailyRecord::empty)
///     .collect();
///
/// let page = paginate(&rows, Pagination::new(10));
/// assert_eq!(page.rows.len(), 10);
/// assert_eq!(page.total_pages, 3);
/// ```
pub fn paginate(rows: &[DailyRecord], pagination: Pagination) -> Page<'_> {
    let page_size = pagination.page_size();
    let start = pagination
        .page_index()
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());

    Page {
        rows: &rows[start..end],
        page_index: pagination.page_index(),
        page_size,
        total_pages: total_pages(rows.len(), page_size),
    }
}
