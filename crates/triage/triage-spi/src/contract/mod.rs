pub mod analysis_service;
pub mod viewed_store;

pub use analysis_service::{AnalysisService, DatasetLoader};
pub use viewed_store::ViewedStore;
