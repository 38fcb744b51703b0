pub mod anomaly_record;
pub mod results_page;
pub mod segment;
pub mod tier;
pub mod view_state;

pub use anomaly_record::AnomalyRecord;
pub use results_page::ResultsPage;
pub use segment::Segment;
pub use tier::{ConfidenceTier, SegmentTier, SeverityTier};
pub use view_state::{SortField, SortOrder, ViewState};
