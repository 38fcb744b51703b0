//! Anomaly Triage Facade
//!
//! Unified re-exports for the pipeline-inspection triage engine.
//!
//! This facade provides a single entry point to all triage functionality:
//! - Models, errors, and collaborator contracts from SPI
//! - Configuration types from API
//! - Classification rules, segment aggregation, the results view
//!   pipeline, viewed-state sync, and `TriageSession` from Core

// Re-export everything from SPI
pub use triage_spi::*;

// Re-export everything from API
pub use triage_api::*;

// Re-export everything from Core
pub use triage_core::*;
