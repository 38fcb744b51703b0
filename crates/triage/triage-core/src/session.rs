//! Triage session.
//!
//! Owns one analysis result set, the results view state, and the viewed
//! store for the session's mode, and coordinates the cross-component
//! transitions: segment click to table filter, sort to filter clearing,
//! filter changes to page resets.

use triage_spi::{
    AnomalyRecord, Result, ResultsPage, Segment, SortField, TriageError, ViewState, ViewedStore,
};

use crate::segments::aggregate_segments;
use crate::sync::{toggle_viewed, LocalViewedStore};
use crate::view::apply_view;

/// Validate an incoming result set before it enters the engine.
///
/// Rejects duplicate anomaly numbers, non-finite numeric fields, and
/// confidence outside 0-100. Record shape is otherwise taken as delivered;
/// CSV content validation belongs to the analysis service.
pub fn validate_records(records: &[AnomalyRecord]) -> Result<()> {
    let mut seen = std::collections::HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.anomaly_number) {
            return Err(TriageError::InvalidRecord(format!(
                "duplicate anomaly number {}",
                record.anomaly_number
            )));
        }
        let numeric = [
            ("startDistance", record.start_distance),
            ("confidence", record.confidence),
            ("severity", record.severity),
            ("persistence", record.persistence),
            ("growthRate", record.growth_rate),
        ];
        for (name, value) in numeric {
            if !value.is_finite() {
                return Err(TriageError::InvalidRecord(format!(
                    "anomaly {}: {} is not a finite number",
                    record.anomaly_number, name
                )));
            }
        }
        if !(0.0..=100.0).contains(&record.confidence) {
            return Err(TriageError::InvalidRecord(format!(
                "anomaly {}: confidence {} outside 0-100",
                record.anomaly_number, record.confidence
            )));
        }
        if record.severity < 0.0 {
            return Err(TriageError::InvalidRecord(format!(
                "anomaly {}: negative severity {}",
                record.anomaly_number, record.severity
            )));
        }
    }
    Ok(())
}

/// One analysis session: result set, view state, and viewed-store mode.
///
/// Discarding the session (dropping it) is the new-analysis reset: the
/// result set and all view state go with it.
pub struct TriageSession {
    records: Vec<AnomalyRecord>,
    view: ViewState,
    store: Box<dyn ViewedStore>,
    scroll_to_table: bool,
}

impl TriageSession {
    /// Start a session over a validated result set with the given
    /// viewed-store. Empty result sets are rejected up front.
    pub fn new(records: Vec<AnomalyRecord>, store: Box<dyn ViewedStore>) -> Result<Self> {
        if records.is_empty() {
            return Err(TriageError::EmptyInput);
        }
        validate_records(&records)?;
        Ok(Self {
            records,
            view: ViewState::default(),
            store,
            scroll_to_table: false,
        })
    }

    /// Local-mode session: viewed toggles succeed in memory without I/O.
    pub fn local(records: Vec<AnomalyRecord>) -> Result<Self> {
        Self::new(records, Box::new(LocalViewedStore))
    }

    pub fn records(&self) -> &[AnomalyRecord] {
        &self.records
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Segment aggregation over the live result set.
    pub fn segments(&self) -> Result<Vec<Segment>> {
        aggregate_segments(&self.records)
    }

    /// The results page described by the current view state.
    pub fn current_page(&self) -> ResultsPage {
        apply_view(&self.records, &self.view)
    }

    /// Sort by `field`; repeated sorts on one field toggle the order, and
    /// sorting clears the segment filter.
    pub fn sort_by(&mut self, field: SortField) {
        self.view.sort_by(field);
    }

    pub fn set_unviewed_only(&mut self, unviewed_only: bool) {
        self.view.set_unviewed_only(unviewed_only);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.view.set_page_size(page_size);
    }

    pub fn toggle_unviewed_only(&mut self) {
        self.view.toggle_unviewed_only();
    }

    /// Segment click: filter the table to this segment onward, then ask the
    /// presentation layer to bring the table into view. The filter is in
    /// effect before the scroll request can be observed.
    pub fn select_segment(&mut self, segment_number: u32) {
        self.view.set_segment_filter(Some(segment_number));
        self.scroll_to_table = true;
    }

    /// Explicit filter clear; the page resets only through the view-state
    /// rule, not as a side effect of this action.
    pub fn clear_segment_filter(&mut self) {
        self.view.clear_segment_filter();
    }

    /// One-shot scroll-to-table request, consumed by the presentation
    /// layer after layout settles.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_table)
    }

    pub fn next_page(&mut self) {
        let total_pages = self.current_page().total_pages;
        self.view.next_page(total_pages);
    }

    pub fn prev_page(&mut self) {
        self.view.prev_page();
    }

    /// Flip the viewed flag through this session's store: confirmed
    /// first, flipped after.
    pub fn toggle_viewed(&mut self, anomaly_number: u64) -> Result<bool> {
        toggle_viewed(&mut self.records, self.store.as_ref(), anomaly_number)
    }
}

impl std::fmt::Debug for TriageSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageSession")
            .field("records", &self.records.len())
            .field("view", &self.view)
            .field("scroll_to_table", &self.scroll_to_table)
            .finish()
    }
}
