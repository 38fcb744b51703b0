//! Basic example demonstrating the anomaly triage engine
//!
//! Run with: cargo run --example basic -p triage

use triage::{AnomalyRecord, SortField, TriageSession};

fn record(
    anomaly_number: u64,
    joint_number: u32,
    severity: f64,
    persistence: f64,
    confidence: f64,
) -> AnomalyRecord {
    AnomalyRecord {
        anomaly_number,
        joint_number,
        start_distance: joint_number as f64 * 12.2,
        anomaly_type: "Metal Loss".to_string(),
        confidence,
        severity,
        persistence,
        growth_rate: 0.2,
        viewed: false,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== pigview triage engine: basic walkthrough ===\n");

    let records = vec![
        record(1, 3, 9.0, 1.0, 95.0),
        record(2, 7, 2.0, 0.0, 60.0),
        record(3, 15, 5.0, 2.0, 88.0),
        record(4, 22, 7.5, 0.0, 72.0),
        record(5, 38, 1.5, 4.0, 51.0),
    ];

    let mut session = TriageSession::local(records)?;

    // 1. Segment overview
    println!("1. Segment overview (10 joints per segment)");
    for segment in session.segments()? {
        let (from, to) = segment.range();
        println!(
            "   {:>3}-{:<3}  severe={} new={} existing={} total={}",
            from, to, segment.severe, segment.new, segment.existing, segment.total
        );
    }

    // 2. Default results view: confidence descending
    println!("\n2. Results table, confidence descending");
    for row in &session.current_page().rows {
        println!(
            "   #{:<3} joint {:>3}  confidence {:>5.1}  severity {:.1}",
            row.anomaly_number, row.joint_number, row.confidence, row.severity
        );
    }

    // 3. Segment click: triage from segment 10 onward
    session.select_segment(10);
    let page = session.current_page();
    println!(
        "\n3. After clicking segment 10: {} of 5 records remain",
        page.total_matches
    );

    // 4. Mark the top row viewed and hide it
    let top = page.rows[0].anomaly_number;
    session.toggle_viewed(top)?;
    session.set_unviewed_only(true);
    println!(
        "4. Marked #{} viewed; unviewed-only view now has {} records",
        top,
        session.current_page().total_matches
    );

    // 5. Sorting by severity clears the segment filter
    session.sort_by(SortField::Severity);
    println!(
        "5. Sorted by severity; segment filter cleared: {:?}",
        session.view().segment_filter
    );

    Ok(())
}
