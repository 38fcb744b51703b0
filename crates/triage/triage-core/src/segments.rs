//! Segment aggregation.
//!
//! Bins a result set into fixed-width pipe segments for the overview
//! heat map. Coverage is gap-free: every multiple of 10 from 0 through the
//! segment containing the highest joint number exists, even when empty.

use triage_spi::{AnomalyRecord, Result, Segment, TriageError};

use crate::rules::classify_segment_tier;

/// Joints per segment.
pub const SEGMENT_WIDTH: u32 = 10;

/// Aggregate a result set into per-segment tier counts, ascending by
/// segment number.
///
/// An empty result set has no maximum joint and is an error; callers must
/// surface it rather than render a zero-segment overview.
pub fn aggregate_segments(records: &[AnomalyRecord]) -> Result<Vec<Segment>> {
    let max_joint = records
        .iter()
        .map(|r| r.joint_number)
        .max()
        .ok_or(TriageError::EmptyInput)?;

    let last_segment = (max_joint / SEGMENT_WIDTH) * SEGMENT_WIDTH;
    let mut segments: Vec<Segment> = (0..=last_segment)
        .step_by(SEGMENT_WIDTH as usize)
        .map(Segment::empty)
        .collect();

    for record in records {
        let index = (record.joint_number / SEGMENT_WIDTH) as usize;
        let tier = classify_segment_tier(record.severity, record.persistence);
        segments[index].record(tier);
    }

    Ok(segments)
}

/// One page of the segment overview.
///
/// Paging is a presentation concern layered on top of the aggregation: the
/// overview grid shows a fixed number of segments per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPage<'a> {
    pub segments: &'a [Segment],
    pub page: usize,
    pub total_pages: usize,
}

/// Slice `segments` into its `page`-th window of `per_page` entries.
pub fn page_segments(segments: &[Segment], page: usize, per_page: usize) -> SegmentPage<'_> {
    let total_pages = segments.len().div_ceil(per_page);
    let start = (page * per_page).min(segments.len());
    let end = ((page + 1) * per_page).min(segments.len());
    SegmentPage {
        segments: &segments[start..end],
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(anomaly_number: u64, joint_number: u32, severity: f64, persistence: f64) -> AnomalyRecord {
        AnomalyRecord {
            anomaly_number,
            joint_number,
            start_distance: joint_number as f64 * 12.2,
            anomaly_type: "Metal Loss".to_string(),
            confidence: 80.0,
            severity,
            persistence,
            growth_rate: 0.1,
            viewed: false,
        }
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let result = aggregate_segments(&[]);
        assert!(matches!(result, Err(TriageError::EmptyInput)));
    }

    #[test]
    fn test_reference_scenario() {
        // joints 3/7/15 with severities 9/2/5 and persistence 1/0/2.
        let records = vec![
            record(1, 3, 9.0, 1.0),
            record(2, 7, 2.0, 0.0),
            record(3, 15, 5.0, 2.0),
        ];
        let segments = aggregate_segments(&records).unwrap();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].segment_number, 0);
        assert_eq!(segments[0].severe, 1);
        assert_eq!(segments[0].new, 1);
        assert_eq!(segments[0].existing, 0);
        assert_eq!(segments[0].total, 2);
        assert_eq!(segments[1].segment_number, 10);
        assert_eq!(segments[1].severe, 0);
        assert_eq!(segments[1].new, 0);
        assert_eq!(segments[1].existing, 1);
        assert_eq!(segments[1].total, 1);
    }

    #[test]
    fn test_coverage_has_no_gaps() {
        let records = vec![record(1, 5, 1.0, 1.0), record(2, 57, 1.0, 1.0)];
        let segments = aggregate_segments(&records).unwrap();

        let numbers: Vec<u32> = segments.iter().map(|s| s.segment_number).collect();
        assert_eq!(numbers, vec![0, 10, 20, 30, 40, 50]);
        // Interior segments exist with zero counts.
        assert!(segments[1..5].iter().all(|s| s.total == 0));
    }

    #[test]
    fn test_last_segment_is_floor_of_max_joint() {
        let records = vec![record(1, 15, 1.0, 1.0)];
        let segments = aggregate_segments(&records).unwrap();
        assert_eq!(segments.last().unwrap().segment_number, 10);

        let records = vec![record(1, 20, 1.0, 1.0)];
        let segments = aggregate_segments(&records).unwrap();
        assert_eq!(segments.last().unwrap().segment_number, 20);
    }

    #[test]
    fn test_totals_match_record_count() {
        let records: Vec<AnomalyRecord> = (0..137)
            .map(|i| record(i, (i as u32 * 7) % 230, (i % 10) as f64, (i % 3) as f64))
            .collect();
        let segments = aggregate_segments(&records).unwrap();

        let sum: u32 = segments.iter().map(|s| s.total).sum();
        assert_eq!(sum as usize, records.len());
        for segment in &segments {
            assert_eq!(segment.total, segment.severe + segment.new + segment.existing);
        }
    }

    #[test]
    fn test_joint_zero_lands_in_first_segment() {
        let records = vec![record(1, 0, 9.0, 0.0)];
        let segments = aggregate_segments(&records).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].segment_number, 0);
        // Severity wins over persistence 0.
        assert_eq!(segments[0].severe, 1);
        assert_eq!(segments[0].new, 0);
    }

    #[test]
    fn test_page_segments_windows() {
        let records = vec![record(1, 5, 1.0, 1.0), record(2, 257, 1.0, 1.0)];
        let segments = aggregate_segments(&records).unwrap();
        assert_eq!(segments.len(), 26);

        let first = page_segments(&segments, 0, 10);
        assert_eq!(first.segments.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.segments[0].segment_number, 0);

        let last = page_segments(&segments, 2, 10);
        assert_eq!(last.segments.len(), 6);
        assert_eq!(last.segments[0].segment_number, 200);
    }

    #[test]
    fn test_page_segments_past_end_is_empty() {
        let records = vec![record(1, 5, 1.0, 1.0)];
        let segments = aggregate_segments(&records).unwrap();
        let page = page_segments(&segments, 9, 100);
        assert!(page.segments.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}
