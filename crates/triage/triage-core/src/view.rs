//! Results view pipeline.
//!
//! Filter, sort, and paginate a result set under one [`ViewState`]. The
//! stage order is part of the contract: unviewed filter, then segment
//! filter, then sort, then pagination.

use std::cmp::Ordering;

use triage_spi::{AnomalyRecord, ResultsPage, SortField, SortOrder, ViewState};

/// Produce the page of records described by `view`.
pub fn apply_view(records: &[AnomalyRecord], view: &ViewState) -> ResultsPage {
    let mut matches: Vec<&AnomalyRecord> = records
        .iter()
        .filter(|r| !view.unviewed_only || !r.viewed)
        .filter(|r| match view.segment_filter {
            // Inclusive lower bound, no upper bound: "from this segment on".
            Some(segment) => r.joint_number >= segment,
            None => true,
        })
        .collect();

    matches.sort_by(|a, b| {
        let key = compare_field(a, b, view.sort_field);
        let key = match view.sort_order {
            SortOrder::Ascending => key,
            SortOrder::Descending => key.reverse(),
        };
        // Deterministic tie-break, independent of sort order.
        key.then_with(|| a.anomaly_number.cmp(&b.anomaly_number))
    });

    let total_matches = matches.len();
    let total_pages = total_matches.div_ceil(view.page_size);
    let start = (view.page * view.page_size).min(total_matches);
    let end = ((view.page + 1) * view.page_size).min(total_matches);

    ResultsPage {
        rows: matches[start..end].iter().map(|r| (*r).clone()).collect(),
        page: view.page,
        total_matches,
        total_pages,
    }
}

fn compare_field(a: &AnomalyRecord, b: &AnomalyRecord, field: SortField) -> Ordering {
    match field {
        SortField::JointNumber => a.joint_number.cmp(&b.joint_number),
        SortField::AnomalyType => a
            .anomaly_type
            .to_lowercase()
            .cmp(&b.anomaly_type.to_lowercase()),
        SortField::Confidence => a.confidence.total_cmp(&b.confidence),
        SortField::Severity => a.severity.total_cmp(&b.severity),
        SortField::Persistence => a.persistence.total_cmp(&b.persistence),
        SortField::GrowthRate => a.growth_rate.total_cmp(&b.growth_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(anomaly_number: u64, joint_number: u32, confidence: f64) -> AnomalyRecord {
        AnomalyRecord {
            anomaly_number,
            joint_number,
            start_distance: joint_number as f64 * 12.2,
            anomaly_type: "Metal Loss".to_string(),
            confidence,
            severity: 3.0,
            persistence: 1.0,
            growth_rate: 0.1,
            viewed: false,
        }
    }

    fn confidence_fixture() -> Vec<AnomalyRecord> {
        vec![record(1, 3, 50.0), record(2, 7, 90.0), record(3, 15, 70.0)]
    }

    #[test]
    fn test_confidence_descending_then_ascending() {
        let records = confidence_fixture();
        let mut view = ViewState::default();

        let page = apply_view(&records, &view);
        let order: Vec<f64> = page.rows.iter().map(|r| r.confidence).collect();
        assert_eq!(order, vec![90.0, 70.0, 50.0]);

        view.sort_by(SortField::Confidence); // toggle to ascending
        let page = apply_view(&records, &view);
        let order: Vec<f64> = page.rows.iter().map(|r| r.confidence).collect();
        assert_eq!(order, vec![50.0, 70.0, 90.0]);
    }

    #[test]
    fn test_segment_filter_is_inclusive_lower_bound() {
        let records = vec![
            record(1, 3, 50.0),
            record(2, 7, 60.0),
            record(3, 15, 70.0),
            record(4, 22, 80.0),
        ];
        let mut view = ViewState::default();
        view.set_segment_filter(Some(10));

        let page = apply_view(&records, &view);
        let mut joints: Vec<u32> = page.rows.iter().map(|r| r.joint_number).collect();
        joints.sort_unstable();
        assert_eq!(joints, vec![15, 22]);
    }

    #[test]
    fn test_segment_filter_keeps_boundary_joint() {
        let records = vec![record(1, 10, 50.0), record(2, 9, 60.0)];
        let mut view = ViewState::default();
        view.set_segment_filter(Some(10));

        let page = apply_view(&records, &view);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].joint_number, 10);
    }

    #[test]
    fn test_unviewed_only_filter() {
        let mut records = confidence_fixture();
        records[1].viewed = true;
        let mut view = ViewState::default();
        view.set_unviewed_only(true);

        let page = apply_view(&records, &view);
        assert_eq!(page.total_matches, 2);
        assert!(page.rows.iter().all(|r| !r.viewed));
    }

    #[test]
    fn test_filters_compose_before_sort_and_pagination() {
        let mut records: Vec<AnomalyRecord> = (0..100)
            .map(|i| record(i, i as u32, f64::from(i as u32 % 50)))
            .collect();
        for r in records.iter_mut().filter(|r| r.anomaly_number % 2 == 0) {
            r.viewed = true;
        }

        let mut view = ViewState::default();
        view.set_unviewed_only(true);
        view.set_segment_filter(Some(40));
        view.page_size = 10;

        let page = apply_view(&records, &view);
        // Odd anomaly numbers with joint >= 40: 41, 43, ... 99 -> 30 records.
        assert_eq!(page.total_matches, 30);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.rows.len(), 10);
        assert!(page.rows.iter().all(|r| r.joint_number >= 40 && !r.viewed));
    }

    #[test]
    fn test_ties_break_by_anomaly_number_ascending() {
        let records = vec![record(9, 1, 70.0), record(2, 2, 70.0), record(5, 3, 70.0)];

        let view = ViewState::default(); // confidence descending
        let page = apply_view(&records, &view);
        let ids: Vec<u64> = page.rows.iter().map(|r| r.anomaly_number).collect();
        assert_eq!(ids, vec![2, 5, 9]);

        let mut view = ViewState::default();
        view.sort_by(SortField::Confidence); // ascending
        let page = apply_view(&records, &view);
        let ids: Vec<u64> = page.rows.iter().map(|r| r.anomaly_number).collect();
        // Same tie-break regardless of direction.
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn test_string_sort_is_case_insensitive() {
        let mut records = confidence_fixture();
        records[0].anomaly_type = "dent".to_string();
        records[1].anomaly_type = "Crack".to_string();
        records[2].anomaly_type = "METAL LOSS".to_string();

        let mut view = ViewState::default();
        view.sort_by(SortField::AnomalyType);
        view.sort_order = SortOrder::Ascending;

        let page = apply_view(&records, &view);
        let types: Vec<&str> = page.rows.iter().map(|r| r.anomaly_type.as_str()).collect();
        assert_eq!(types, vec!["Crack", "dent", "METAL LOSS"]);
    }

    #[test]
    fn test_pagination_slices_and_counts() {
        let records: Vec<AnomalyRecord> =
            (0..75).map(|i| record(i, i as u32, 50.0)).collect();
        let mut view = ViewState::default();
        view.page_size = 30;

        let page = apply_view(&records, &view);
        assert_eq!(page.total_matches, 75);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.rows.len(), 30);
        assert_eq!(page.row_range(view.page_size), Some((1, 30)));

        view.page = 2;
        let page = apply_view(&records, &view);
        assert_eq!(page.rows.len(), 15);
        assert_eq!(page.row_range(view.page_size), Some((61, 75)));
    }

    #[test]
    fn test_empty_match_set_yields_zero_pages() {
        let records = confidence_fixture();
        let mut view = ViewState::default();
        view.set_segment_filter(Some(1000));

        let page = apply_view(&records, &view);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_matches, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.row_range(view.page_size), None);
    }

    #[test]
    fn test_identical_input_is_deterministic() {
        let records: Vec<AnomalyRecord> = (0..40)
            .map(|i| record(i, (i % 7) as u32, f64::from(i as u32 % 5)))
            .collect();
        let mut view = ViewState::default();
        view.set_segment_filter(Some(2));
        view.page_size = 10;

        let first = apply_view(&records, &view);
        let second = apply_view(&records, &view);
        assert_eq!(first, second);
    }
}
