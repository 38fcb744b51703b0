//! Backend collaborators for pigview
//!
//! Client side of the external analysis service (file submission, analysis
//! trigger, viewed-state updates) and the embedded demonstration dataset
//! used to exercise the viewer without a live backend.

mod client;
mod demo;

pub use client::AnalysisClient;
pub use demo::DemoDataset;
