//! Search filter → sort → paginate pipeline over the record collection.
//!
//! Everything here is a pure function of its inputs; the
//! [`RecordsetCompute`](crate::RecordsetCompute) calls [`process`] whenever the
//! records, the search term or the sort directive change.

use crate::{Record, SortDirective, date_format};

/// Rows per table page.
pub const PAGE_SIZE: usize = 5;

/// The lower-cased strings a search term is matched against.
pub fn search_projections(record: &Record) -> [String; 5] {
    [
        record.full_name().to_lowercase(),
        record.username.to_lowercase(),
        record.email.to_lowercase(),
        record.group_access.label().to_lowercase(),
        date_format(&record.expired_date).to_lowercase(),
    ]
}

/// Whether `record` matches `term` (trimmed, case-insensitive substring).
pub fn matches_search(record: &Record, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    needle.is_empty()
        || search_projections(record)
            .iter()
            .any(|projection| projection.contains(&needle))
}

/// Keeps the records matching `term`, in their original order.
pub fn filter_records(records: &[Record], term: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|record| matches_search(record, term))
        .cloned()
        .collect()
}

/// Stable in-place sort. Leaves the order untouched when the directive has no
/// column or targets `Actions`.
pub fn sort_records(records: &mut [Record], directive: SortDirective) {
    let sortable = directive
        .column()
        .is_some_and(|column| column.is_sortable());
    if !sortable {
        return;
    }
    records.sort_by(|a, b| {
        directive
            .compare(a, b)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Runs filter then sort, yielding the full list behind the table.
pub fn process(records: &[Record], term: &str, directive: SortDirective) -> Vec<Record> {
    let mut rows = filter_records(records, term);
    sort_records(&mut rows, directive);
    rows
}

/// `ceil(len / page_size)`; zero for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Rows of the 1-based `page`. Pages outside the list are empty, not clamped.
pub fn paginate(records: &[Record], page_size: usize, page: usize) -> &[Record] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(records.len());
    records.get(start..end).unwrap_or(&[])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

/// Pager position over the processed list.
///
/// With no rows `total` is zero while `current` stays at 1 and neither
/// direction is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Pagination {
    /// Starts on page 1.
    pub fn new(total: usize) -> Self {
        Self { current: 1, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Total shown in the pager; an empty table still reads "Page 1 of 1".
    pub fn display_total(&self) -> usize {
        self.total.max(1)
    }

    pub fn can_previous(&self) -> bool {
        self.current > 1
    }

    pub fn can_next(&self) -> bool {
        self.current < self.total
    }

    /// Moves one page if allowed. Returns whether the page changed.
    pub fn step(&mut self, direction: PageDirection) -> bool {
        match direction {
            PageDirection::Previous if self.can_previous() => self.current -= 1,
            PageDirection::Next if self.can_next() => self.current += 1,
            _ => return false,
        }
        true
    }
}
