//! End-to-end tests for the triage crate.
//!
//! Walks complete triage workflows through the public facade only, the way
//! the TUI and CLI drive it.

use triage::{
    Result, SortField, TriageError, TriageSession, ViewedStore,
};

fn record(anomaly_number: u64, joint_number: u32, severity: f64) -> triage::AnomalyRecord {
    triage::AnomalyRecord {
        anomaly_number,
        joint_number,
        start_distance: joint_number as f64 * 12.2,
        anomaly_type: if anomaly_number % 2 == 0 { "Dent" } else { "Crack" }.to_string(),
        confidence: 50.0 + (anomaly_number % 50) as f64,
        severity,
        persistence: (anomaly_number % 3) as f64,
        growth_rate: 0.1 * anomaly_number as f64,
        viewed: false,
    }
}

fn large_run() -> Vec<triage::AnomalyRecord> {
    (1..=120)
        .map(|i| record(i, (i as u32 * 3) % 200, (i % 11) as f64))
        .collect()
}

/// Store that refuses every toggle, standing in for a failing triage
/// service.
struct FailingStore;

impl ViewedStore for FailingStore {
    fn toggle_viewed(&self, _anomaly_number: u64) -> Result<()> {
        Err(TriageError::RemoteToggle("connect refused".to_string()))
    }
}

#[test]
fn e2e_segment_click_filters_table_then_scrolls() {
    let mut session = TriageSession::local(large_run()).unwrap();

    let segments = session.segments().unwrap();
    let busy = segments.iter().find(|s| s.total > 0).unwrap();
    let clicked = busy.segment_number;

    session.select_segment(clicked);

    let page = session.current_page();
    assert!(page.rows.iter().all(|r| r.joint_number >= clicked));
    assert!(session.take_scroll_request());
}

#[test]
fn e2e_sort_clears_filter_and_repagination() {
    let mut session = TriageSession::local(large_run()).unwrap();
    session.select_segment(100);
    session.take_scroll_request();
    session.next_page();

    session.sort_by(SortField::Severity);
    assert_eq!(session.view().segment_filter, None);

    let page = session.current_page();
    assert_eq!(page.total_matches, 120);
    for pair in page.rows.windows(2) {
        assert!(pair[0].severity >= pair[1].severity);
    }
}

#[test]
fn e2e_triage_workflow_marks_and_filters() {
    let mut session = TriageSession::local(large_run()).unwrap();

    // Review the first page, marking every row viewed.
    let first_page: Vec<u64> = session
        .current_page()
        .rows
        .iter()
        .map(|r| r.anomaly_number)
        .collect();
    for anomaly in &first_page {
        assert!(session.toggle_viewed(*anomaly).unwrap());
    }

    // The unviewed-only view no longer contains them.
    session.set_unviewed_only(true);
    let page = session.current_page();
    assert_eq!(page.total_matches, 120 - first_page.len());
    assert!(page
        .rows
        .iter()
        .all(|r| !first_page.contains(&r.anomaly_number)));
}

#[test]
fn e2e_remote_failure_keeps_local_state() {
    let mut session =
        TriageSession::new(large_run(), Box::new(FailingStore)).unwrap();

    let target = session.records()[0].anomaly_number;
    let before = session.records()[0].viewed;

    let result = session.toggle_viewed(target);
    assert!(matches!(result, Err(TriageError::RemoteToggle(_))));
    assert_eq!(session.records()[0].viewed, before);
}

#[test]
fn e2e_new_analysis_reset_discards_session() {
    let mut holder = Some(TriageSession::local(large_run()).unwrap());
    holder.as_mut().unwrap().select_segment(50);

    // The new-analysis action drops the session wholesale.
    holder = None;
    assert!(holder.is_none());

    // A fresh session starts from the default view.
    let fresh = TriageSession::local(large_run()).unwrap();
    assert_eq!(fresh.view().segment_filter, None);
    assert_eq!(fresh.view().page, 0);
}

#[test]
fn e2e_full_overview_to_table_consistency() {
    let session = TriageSession::local(large_run()).unwrap();
    let segments = session.segments().unwrap();

    // Every record is in exactly one segment bucket.
    let total: u32 = segments.iter().map(|s| s.total).sum();
    assert_eq!(total as usize, session.records().len());

    // Summing table matches per segment filter reproduces the bucket tail
    // sums (the filter is a lower bound, so counts are cumulative).
    let mut view = triage::ViewState::default();
    view.page_size = 1000;
    for segment in &segments {
        view.set_segment_filter(Some(segment.segment_number));
        let matches = triage::apply_view(session.records(), &view).total_matches;
        let expected: u32 = segments
            .iter()
            .filter(|s| s.segment_number >= segment.segment_number)
            .map(|s| s.total)
            .sum();
        assert_eq!(matches, expected as usize);
    }
}
