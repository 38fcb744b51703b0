//! Anomaly Triage Core
//!
//! Engine implementations: classification rules, segment aggregation, the
//! results view pipeline, viewed-state synchronization, and the triage
//! session that coordinates them.

pub mod rules;
pub mod segments;
pub mod session;
pub mod sync;
pub mod view;

pub use rules::{
    classify_confidence, classify_segment_tier, classify_severity, CONFIDENCE_HIGH_THRESHOLD,
    CONFIDENCE_MEDIUM_THRESHOLD, MODERATE_BADGE_THRESHOLD, SEVERE_BADGE_THRESHOLD,
    SEVERE_SEGMENT_THRESHOLD,
};
pub use segments::{aggregate_segments, page_segments, SegmentPage, SEGMENT_WIDTH};
pub use session::{validate_records, TriageSession};
pub use sync::{toggle_viewed, LocalViewedStore};
pub use view::apply_view;
