//! Demonstration dataset.
//!
//! A static anomaly result set compiled into the binary, used to exercise
//! the viewer without the live analysis backend. Loading it engages local
//! mode: viewed toggles stay in memory.

use triage::{validate_records, AnomalyRecord, DatasetLoader, Result, TriageError};

const DEMO_DATA: &str = include_str!("demo_data.json");

/// Loader for the embedded demonstration result set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoDataset;

impl DemoDataset {
    pub fn new() -> Self {
        Self
    }

    /// Parse and validate the embedded records.
    pub fn load(&self) -> Result<Vec<AnomalyRecord>> {
        let records: Vec<AnomalyRecord> = serde_json::from_str(DEMO_DATA)
            .map_err(|e| TriageError::InvalidRecord(format!("demo dataset: {e}")))?;
        validate_records(&records)?;
        Ok(records)
    }
}

impl DatasetLoader for DemoDataset {
    fn load(&self) -> Result<Vec<AnomalyRecord>> {
        DemoDataset::load(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage::{aggregate_segments, classify_segment_tier, SegmentTier, TriageSession};

    #[test]
    fn test_demo_dataset_loads_and_validates() {
        let records = DemoDataset::new().load().unwrap();
        assert!(!records.is_empty());
    }

    #[test]
    fn test_demo_dataset_spans_many_segments() {
        let records = DemoDataset::new().load().unwrap();
        let segments = aggregate_segments(&records).unwrap();
        assert!(segments.len() > 10);
        let total: u32 = segments.iter().map(|s| s.total).sum();
        assert_eq!(total as usize, records.len());
    }

    #[test]
    fn test_demo_dataset_covers_all_tiers() {
        let records = DemoDataset::new().load().unwrap();
        let has = |tier: SegmentTier| {
            records
                .iter()
                .any(|r| classify_segment_tier(r.severity, r.persistence) == tier)
        };
        assert!(has(SegmentTier::Severe));
        assert!(has(SegmentTier::New));
        assert!(has(SegmentTier::Existing));
    }

    #[test]
    fn test_demo_dataset_includes_prior_triage() {
        let records = DemoDataset::new().load().unwrap();
        assert!(records.iter().any(|r| r.viewed));
        assert!(records.iter().any(|r| !r.viewed));
    }

    #[test]
    fn test_demo_dataset_starts_a_local_session() {
        let records = DemoDataset::new().load().unwrap();
        let mut session = TriageSession::local(records).unwrap();
        let first = session.records()[0].anomaly_number;
        let before = session.records()[0].viewed;
        session.toggle_viewed(first).unwrap();
        assert_ne!(session.records()[0].viewed, before);
    }
}
