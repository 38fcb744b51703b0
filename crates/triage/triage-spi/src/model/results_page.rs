//! Results page types.

use serde::{Deserialize, Serialize};

use super::anomaly_record::AnomalyRecord;

/// One page of the filtered, sorted results view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsPage {
    /// Records on this page, in display order.
    pub rows: Vec<AnomalyRecord>,
    /// Zero-based page index.
    pub page: usize,
    /// Records matching the filters across all pages.
    pub total_matches: usize,
    /// Page count at the current page size.
    pub total_pages: usize,
}

impl ResultsPage {
    /// One-based display range `(first, last)` of this page's rows, for
    /// "Showing X-Y of Z". `None` when there are no matches.
    pub fn row_range(&self, page_size: usize) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = self.page * page_size + 1;
        let last = self.page * page_size + self.rows.len();
        Some((first, last))
    }
}
