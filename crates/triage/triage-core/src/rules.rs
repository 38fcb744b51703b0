//! Classification rules.
//!
//! Pure, stateless, total functions mapping numeric scores to discrete
//! tiers. Two severity cut points coexist: 8 tiers the table badge, 7
//! tiers the segment overview. They are independent observables and must
//! stay separate constants.

use triage_spi::{ConfidenceTier, SegmentTier, SeverityTier};

/// Severity at or above this renders a severe table badge.
pub const SEVERE_BADGE_THRESHOLD: f64 = 8.0;

/// Severity at or above this (and below [`SEVERE_BADGE_THRESHOLD`]) renders
/// a moderate table badge.
pub const MODERATE_BADGE_THRESHOLD: f64 = 5.0;

/// Confidence at or above this is high.
pub const CONFIDENCE_HIGH_THRESHOLD: f64 = 90.0;

/// Confidence at or above this (and below
/// [`CONFIDENCE_HIGH_THRESHOLD`]) is medium.
pub const CONFIDENCE_MEDIUM_THRESHOLD: f64 = 70.0;

/// Severity at or above this classifies an anomaly as severe in the
/// segment overview.
pub const SEVERE_SEGMENT_THRESHOLD: f64 = 7.0;

/// Display tier for a severity score.
pub fn classify_severity(severity: f64) -> SeverityTier {
    if severity >= SEVERE_BADGE_THRESHOLD {
        SeverityTier::Severe
    } else if severity >= MODERATE_BADGE_THRESHOLD {
        SeverityTier::Moderate
    } else {
        SeverityTier::Low
    }
}

/// Display tier for a confidence percentage.
pub fn classify_confidence(confidence: f64) -> ConfidenceTier {
    if confidence >= CONFIDENCE_HIGH_THRESHOLD {
        ConfidenceTier::High
    } else if confidence >= CONFIDENCE_MEDIUM_THRESHOLD {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

/// Segment tier for one anomaly. First match wins: severe, then new
/// (persistence 0), then existing.
pub fn classify_segment_tier(severity: f64, persistence: f64) -> SegmentTier {
    if severity >= SEVERE_SEGMENT_THRESHOLD {
        SegmentTier::Severe
    } else if persistence == 0.0 {
        SegmentTier::New
    } else {
        SegmentTier::Existing
    }
}
