//! Anomaly Triage Service Provider Interface
//!
//! Defines traits and types for pipeline-inspection anomaly triage.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{AnalysisService, DatasetLoader, ViewedStore};
pub use error::{Result, TriageError};
pub use model::{
    AnomalyRecord, ConfidenceTier, ResultsPage, Segment, SegmentTier, SeverityTier, SortField,
    SortOrder, ViewState,
};
