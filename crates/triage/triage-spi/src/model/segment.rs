//! Segment aggregate types.

use serde::{Deserialize, Serialize};

use super::tier::SegmentTier;

/// Aggregate over a contiguous range of 10 joint numbers.
///
/// A synthetic overview bucket, not a physical pipeline unit.
/// `segment_number` is the range's lower bound and always a multiple of 10;
/// `total` is always `severe + new + existing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub segment_number: u32,
    pub severe: u32,
    pub new: u32,
    pub existing: u32,
    pub total: u32,
}

impl Segment {
    /// Zero-valued segment for the given lower bound.
    pub fn empty(segment_number: u32) -> Self {
        Self {
            segment_number,
            severe: 0,
            new: 0,
            existing: 0,
            total: 0,
        }
    }

    /// Record one anomaly of the given tier.
    pub fn record(&mut self, tier: SegmentTier) {
        match tier {
            SegmentTier::Severe => self.severe += 1,
            SegmentTier::New => self.new += 1,
            SegmentTier::Existing => self.existing += 1,
        }
        self.total += 1;
    }

    /// Inclusive joint range covered by this segment, for display.
    pub fn range(&self) -> (u32, u32) {
        (self.segment_number, self.segment_number + 9)
    }

    /// Highest-precedence tier present, or `None` for an empty segment.
    pub fn dominant_tier(&self) -> Option<SegmentTier> {
        if self.severe > 0 {
            Some(SegmentTier::Severe)
        } else if self.new > 0 {
            Some(SegmentTier::New)
        } else if self.existing > 0 {
            Some(SegmentTier::Existing)
        } else {
            None
        }
    }

    /// Per-tier share of `total` as `(severe, new, existing)` in `[0, 1]`.
    ///
    /// All zero when the segment is empty.
    pub fn tier_fractions(&self) -> (f64, f64, f64) {
        if self.total == 0 {
            return (0.0, 0.0, 0.0);
        }
        let total = f64::from(self.total);
        (
            f64::from(self.severe) / total,
            f64::from(self.new) / total,
            f64::from(self.existing) / total,
        )
    }
}
