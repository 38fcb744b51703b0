//! Anomaly Triage API
//!
//! Configuration types for the triage engine and its collaborators.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use triage_spi::{Result, TriageError};

// ============================================================================
// Results View Configuration
// ============================================================================

/// Results table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Table rows per page (default: 30).
    pub page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { page_size: 30 }
    }
}

impl ViewConfig {
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }
}

// ============================================================================
// Overview Configuration
// ============================================================================

/// Segment overview configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewConfig {
    /// Segments per overview page (default: 100, a 10x10 grid).
    pub segments_per_page: usize,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            segments_per_page: 100,
        }
    }
}

impl OverviewConfig {
    pub fn new(segments_per_page: usize) -> Self {
        Self { segments_per_page }
    }
}

// ============================================================================
// Analysis Client Configuration
// ============================================================================

/// Default analysis service base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the analysis service base URL.
pub const API_URL_ENV: &str = "PIGVIEW_API_URL";

/// Analysis service client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Analysis service base URL.
    pub base_url: String,
    /// Health-check preflight timeout (default: 3 s).
    pub health_timeout: Duration,
    /// File upload timeout (default: 30 s).
    pub upload_timeout: Duration,
    /// Analysis run timeout; the pipeline can take minutes (default: 300 s).
    pub analyze_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            health_timeout: Duration::from_secs(3),
            upload_timeout: Duration::from_secs(30),
            analyze_timeout: Duration::from_secs(300),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Default configuration, with the base URL taken from
    /// `PIGVIEW_API_URL` when set.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_config_default_page_size() {
        assert_eq!(ViewConfig::default().page_size, 30);
    }

    #[test]
    fn test_overview_config_default_grid() {
        assert_eq!(OverviewConfig::default().segments_per_page, 100);
    }

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.health_timeout, Duration::from_secs(3));
        assert_eq!(config.upload_timeout, Duration::from_secs(30));
        assert_eq!(config.analyze_timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_client_config_new_keeps_timeouts() {
        let config = ClientConfig::new("http://pig.example:9000");
        assert_eq!(config.base_url, "http://pig.example:9000");
        assert_eq!(config.analyze_timeout, Duration::from_secs(300));
    }
}
