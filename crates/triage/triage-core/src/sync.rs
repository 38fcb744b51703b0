//! Viewed-state synchronization.
//!
//! Toggling a record's viewed flag is a two-phase operation: the store
//! confirms the toggle first, and only then does the in-memory flag flip.
//! A failed confirmation leaves the record untouched, so the displayed
//! state never silently diverges from the authoritative one. Local mode
//! uses a store whose confirmation is immediate and infallible.

use triage_spi::{AnomalyRecord, Result, TriageError, ViewedStore};

/// Viewed-state store for demonstration data: no backing service, every
/// toggle succeeds without I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalViewedStore;

impl LocalViewedStore {
    pub fn new() -> Self {
        Self
    }
}

impl ViewedStore for LocalViewedStore {
    fn toggle_viewed(&self, _anomaly_number: u64) -> Result<()> {
        Ok(())
    }
}

/// Flip the viewed flag of the matching record through `store`.
///
/// Exactly one flip per successful call, applied only to the matching
/// record; returns the new flag value. An unknown anomaly number is an
/// error and the store is never contacted.
pub fn toggle_viewed(
    records: &mut [AnomalyRecord],
    store: &dyn ViewedStore,
    anomaly_number: u64,
) -> Result<bool> {
    let record = records
        .iter_mut()
        .find(|r| r.anomaly_number == anomaly_number)
        .ok_or(TriageError::UnknownAnomaly(anomaly_number))?;

    store.toggle_viewed(anomaly_number)?;

    record.viewed = !record.viewed;
    Ok(record.viewed)
}
