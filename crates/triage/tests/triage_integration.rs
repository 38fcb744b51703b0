//! Integration tests for the triage engine.

use triage::{
    aggregate_segments, apply_view, classify_segment_tier, AnomalyRecord, SegmentTier, SortField,
    TriageError, ViewState,
};

fn record(
    anomaly_number: u64,
    joint_number: u32,
    severity: f64,
    persistence: f64,
) -> AnomalyRecord {
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

fn inspection_run() -> Vec<AnomalyRecord> {
    vec![
        record(1, 3, 9.0, 1.0),
        record(2, 7, 2.0, 0.0),
        record(3, 15, 5.0, 2.0),
        record(4, 22, 7.0, 0.0),
        record(5, 38, 1.5, 4.0),
        record(6, 41, 8.2, 3.0),
    ]
}

#[test]
fn test_segment_totals_equal_record_count() {
    let records = inspection_run();
    let segments = aggregate_segments(&records).unwrap();
    let total: u32 = segments.iter().map(|s| s.total).sum();
    assert_eq!(total as usize, records.len());
}

#[test]
fn test_segment_counts_are_consistent() {
    let segments = aggregate_segments(&inspection_run()).unwrap();
    for segment in &segments {
        assert_eq!(
            segment.total,
            segment.severe + segment.new + segment.existing
        );
        assert_eq!(segment.segment_number % 10, 0);
    }
}

#[test]
fn test_segment_sequence_is_gap_free() {
    let segments = aggregate_segments(&inspection_run()).unwrap();
    let numbers: Vec<u32> = segments.iter().map(|s| s.segment_number).collect();
    assert_eq!(numbers, vec![0, 10, 20, 30, 40]);
}

#[test]
fn test_exactly_one_tier_per_record() {
    for record in inspection_run() {
        let tier = classify_segment_tier(record.severity, record.persistence);
        let as_severe = matches!(tier, SegmentTier::Severe);
        let as_new = matches!(tier, SegmentTier::New);
        let as_existing = matches!(tier, SegmentTier::Existing);
        assert_eq!(
            [as_severe, as_new, as_existing].iter().filter(|&&t| t).count(),
            1
        );
    }
}

#[test]
fn test_severe_takes_precedence_when_persistence_zero() {
    // Anomaly 4: severity 7.0 and persistence 0 — counted severe, not new.
    let segments = aggregate_segments(&inspection_run()).unwrap();
    let segment_20 = &segments[2];
    assert_eq!(segment_20.severe, 1);
    assert_eq!(segment_20.new, 0);
}

#[test]
fn test_empty_run_fails_aggregation() {
    assert!(matches!(
        aggregate_segments(&[]),
        Err(TriageError::EmptyInput)
    ));
}

#[test]
fn test_view_pipeline_is_deterministic() {
    let mut records = inspection_run();
    records[1].viewed = true;

    let mut view = ViewState::default();
    view.set_unviewed_only(true);
    view.set_segment_filter(Some(10));
    view.sort_field = SortField::Severity;

    let first = apply_view(&records, &view);
    let second = apply_view(&records, &view);
    assert_eq!(first, second);
    assert!(first.rows.iter().all(|r| r.joint_number >= 10 && !r.viewed));
}

#[test]
fn test_segment_filter_keeps_downstream_joints_only() {
    let records = vec![
        record(1, 3, 1.0, 1.0),
        record(2, 7, 1.0, 1.0),
        record(3, 15, 1.0, 1.0),
        record(4, 22, 1.0, 1.0),
    ];
    let mut view = ViewState::default();
    view.set_segment_filter(Some(10));

    let page = apply_view(&records, &view);
    let mut joints: Vec<u32> = page.rows.iter().map(|r| r.joint_number).collect();
    joints.sort_unstable();
    assert_eq!(joints, vec![15, 22]);
}
