//! Discrete classification tiers.

use serde::{Deserialize, Serialize};

/// Segment-level classification of one anomaly.
///
/// Exactly one tier applies per record; precedence is
/// severe > new > existing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentTier {
    Severe,
    New,
    Existing,
}

impl SegmentTier {
    pub fn name(self) -> &'static str {
        match self {
            SegmentTier::Severe => "Severe",
            SegmentTier::New => "New",
            SegmentTier::Existing => "Existing",
        }
    }
}

/// Display tier for a severity badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityTier {
    Severe,
    Moderate,
    Low,
}

impl SeverityTier {
    pub fn name(self) -> &'static str {
        match self {
            SeverityTier::Severe => "Severe",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::Low => "Low",
        }
    }
}

/// Display tier for a confidence badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn name(self) -> &'static str {
        match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Medium => "Medium",
            ConfidenceTier::Low => "Low",
        }
    }
}
