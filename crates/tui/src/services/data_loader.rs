//! Loading saved analysis results from disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use triage::{validate_records, AnomalyRecord};

/// Error type for results loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse results JSON: {0}")]
    JsonError(String),

    #[error("Invalid result set: {0}")]
    InvalidRecords(String),
}

/// A saved results file: either a bare record array or the analysis
/// service's `{"results": [...]}` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResultsFile {
    Wrapped { results: Vec<AnomalyRecord> },
    Bare(Vec<AnomalyRecord>),
}

/// Load an anomaly result set from a JSON file.
pub fn load_results_file(path: &Path) -> Result<Vec<AnomalyRecord>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::FileNotFound(e.to_string()))?;
    let parsed: ResultsFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| LoadError::JsonError(e.to_string()))?;

    let records = match parsed {
        ResultsFile::Wrapped { results } => results,
        ResultsFile::Bare(records) => records,
    };

    validate_records(&records).map_err(|e| LoadError::InvalidRecords(e.to_string()))?;
    Ok(records)
}
