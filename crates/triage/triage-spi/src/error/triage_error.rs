//! Anomaly triage error types.

use thiserror::Error;

/// Anomaly triage errors.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Cannot aggregate an empty result set")]
    EmptyInput,

    #[error("Viewed-state update failed: {0}")]
    RemoteToggle(String),

    #[error("Analysis service unavailable: {0}")]
    AnalysisUnavailable(String),

    #[error("No anomaly with number {0} in the result set")]
    UnknownAnomaly(u64),

    #[error("Invalid anomaly record: {0}")]
    InvalidRecord(String),
}

/// Result type for anomaly triage operations.
pub type Result<T> = std::result::Result<T, TriageError>;
