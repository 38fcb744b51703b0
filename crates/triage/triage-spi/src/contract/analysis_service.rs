//! Analysis collaborator traits.

use std::path::PathBuf;

use crate::error::Result;
use crate::model::AnomalyRecord;

/// The external analysis pipeline: takes uploaded inspection files,
/// produces a flat anomaly result set.
///
/// The pipeline itself is a black box to the triage engine; only the
/// submission interface is specified here.
pub trait AnalysisService: Send + Sync {
    /// Submit inspection files and wait for the resulting record set.
    fn run_analysis(&self, files: &[PathBuf]) -> Result<Vec<AnomalyRecord>>;
}

/// Supplier of a static demonstration result set, used to exercise the
/// viewer without the live analysis backend. Engages local mode for
/// viewed-state updates.
pub trait DatasetLoader: Send + Sync {
    /// Load the demonstration records.
    fn load(&self) -> Result<Vec<AnomalyRecord>>;
}
