//! Results view state.
//!
//! One value object holds everything that shapes the results table: sort
//! key and direction, the unviewed-only filter, the segment filter, and
//! pagination. Transitions enforce the coupling rules between them, so a
//! view state plus a record set fully determines the rendered page.

use serde::{Deserialize, Serialize};

/// Default number of table rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Sortable results-table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortField {
    JointNumber,
    /// The string-valued sort; compares case-insensitively.
    AnomalyType,
    #[default]
    Confidence,
    Severity,
    Persistence,
    GrowthRate,
}

impl SortField {
    pub fn name(self) -> &'static str {
        match self {
            SortField::JointNumber => "Joint #",
            SortField::AnomalyType => "Type",
            SortField::Confidence => "Confidence",
            SortField::Severity => "Severity",
            SortField::Persistence => "Persistence",
            SortField::GrowthRate => "Growth Rate",
        }
    }

    pub fn all() -> &'static [SortField] {
        &[
            SortField::JointNumber,
            SortField::AnomalyType,
            SortField::Confidence,
            SortField::Severity,
            SortField::Persistence,
            SortField::GrowthRate,
        ]
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// The combined sort/filter/pagination state of the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// Keep only records not yet marked viewed.
    pub unviewed_only: bool,
    /// Inclusive lower bound on `joint_number`; "from this segment onward".
    pub segment_filter: Option<u32>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            unviewed_only: false,
            segment_filter: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by `field`. Re-selecting the current field toggles the order;
    /// a new field starts descending. Sorting always drops the segment
    /// filter.
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Descending;
        }
        self.set_segment_filter(None);
    }

    /// Set or clear the segment filter. The page resets only when the
    /// filter actually changes.
    pub fn set_segment_filter(&mut self, filter: Option<u32>) {
        if self.segment_filter != filter {
            self.segment_filter = filter;
            self.page = 0;
        }
    }

    pub fn clear_segment_filter(&mut self) {
        self.set_segment_filter(None);
    }

    /// Set the unviewed-only filter; any change resets the page.
    pub fn set_unviewed_only(&mut self, unviewed_only: bool) {
        if self.unviewed_only != unviewed_only {
            self.unviewed_only = unviewed_only;
            self.page = 0;
        }
    }

    pub fn toggle_unviewed_only(&mut self) {
        self.set_unviewed_only(!self.unviewed_only);
    }

    /// Change the page size; repagination restarts from the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        if self.page_size != page_size && page_size > 0 {
            self.page_size = page_size;
            self.page = 0;
        }
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page + 1 < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }
}
