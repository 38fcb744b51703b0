pub mod triage_error;

pub use triage_error::{Result, TriageError};
