//! Analysis service client.
//!
//! HTTP client for the external analysis pipeline. The pipeline itself is
//! a black box: files go up, a flat anomaly record set comes back, and a
//! PATCH per anomaly toggles the authoritative viewed flag. Async methods
//! carry the I/O; `_blocking` twins serve the synchronous front ends.
//!
//! # Example
//!
//! ```rust,no_run
//! use backend::AnalysisClient;
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AnalysisClient::from_env();
//!     let records = client
//!         .run_analysis(&[PathBuf::from("inspection.csv")])
//!         .await
//!         .unwrap();
//!     println!("Got {} anomaly records", records.len());
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use triage::{
    validate_records, AnalysisService, AnomalyRecord, ClientConfig, Result, TriageError,
    ViewedStore,
};

/// Analysis service response to `POST /api/analyze`.
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    results: Vec<AnomalyRecord>,
}

/// Analysis service response to `POST /api/upload`.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    errors: Vec<String>,
}

/// Analysis service response to `GET /api/health`.
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error body the service attaches to failed responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    details: Option<String>,
}

impl ErrorBody {
    fn detail_string(self) -> String {
        match self.details {
            Some(details) => format!("{} ({})", self.error, details),
            None => self.error,
        }
    }
}

fn service_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.detail_string(),
        Err(_) => format!("HTTP {}", status),
    }
}

/// Client for the external analysis service.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    config: ClientConfig,
}

impl Default for AnalysisClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl AnalysisClient {
    /// Create a client with explicit configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Create a client configured from the environment
    /// (`PIGVIEW_API_URL`), falling back to the default local service.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn viewed_endpoint(&self, anomaly_number: u64) -> String {
        self.endpoint(&format!("/api/anomaly/{}/viewed", anomaly_number))
    }

    // ------------------------------------------------------------------
    // Async API
    // ------------------------------------------------------------------

    /// Health-check preflight. `Ok(true)` only when the service reports
    /// itself healthy; transport failures are `Ok(false)` so callers can
    /// turn them into one uniform "service not running" report.
    pub async fn health(&self) -> Result<bool> {
        let client = reqwest::Client::builder()
            .timeout(self.config.health_timeout)
            .build()
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;

        let url = self.endpoint("/api/health");
        tracing::debug!(%url, "health preflight");
        match client.get(&url).send().await {
            Ok(response) => match response.json::<HealthResponse>().await {
                Ok(health) => Ok(health.status == "healthy"),
                Err(_) => Ok(false),
            },
            Err(_) => Ok(false),
        }
    }

    /// Upload inspection files. Returns per-file warnings the service
    /// reported without failing the upload.
    pub async fn upload(&self, files: &[PathBuf]) -> Result<Vec<String>> {
        let client = reqwest::Client::builder()
            .timeout(self.config.upload_timeout)
            .build()
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;

        let mut form = reqwest::multipart::Form::new();
        for path in files {
            form = form.part("files", file_part(path)?);
        }

        let url = self.endpoint("/api/upload");
        tracing::debug!(%url, count = files.len(), "uploading inspection files");
        let response = client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;
        if !status.is_success() {
            return Err(TriageError::AnalysisUnavailable(service_error(
                status, &body,
            )));
        }

        let upload: UploadResponse = serde_json::from_str(&body)
            .map_err(|e| TriageError::AnalysisUnavailable(format!("bad upload response: {e}")))?;
        Ok(upload.errors)
    }

    /// Trigger analysis of the uploaded files and collect the result set.
    pub async fn analyze(&self) -> Result<Vec<AnomalyRecord>> {
        let client = reqwest::Client::builder()
            .timeout(self.config.analyze_timeout)
            .build()
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;

        let url = self.endpoint("/api/analyze");
        tracing::debug!(%url, "running analysis");
        let response = client
            .post(&url)
            .send()
            .await
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;
        if !status.is_success() {
            return Err(TriageError::AnalysisUnavailable(service_error(
                status, &body,
            )));
        }

        let analysis: AnalyzeResponse = serde_json::from_str(&body)
            .map_err(|e| TriageError::AnalysisUnavailable(format!("bad analyze response: {e}")))?;
        Ok(analysis.results)
    }

    /// Full submission flow: preflight, upload, analyze, validate.
    /// Upload warnings are logged and do not fail the run.
    pub async fn run_analysis(&self, files: &[PathBuf]) -> Result<Vec<AnomalyRecord>> {
        if !self.health().await? {
            return Err(TriageError::AnalysisUnavailable(format!(
                "service at {} is not running",
                self.config.base_url
            )));
        }

        let warnings = self.upload(files).await?;
        for warning in &warnings {
            tracing::warn!(%warning, "upload warning");
        }

        let records = self.analyze().await?;
        validate_records(&records)?;
        tracing::info!(count = records.len(), "analysis complete");
        Ok(records)
    }

    /// Toggle the authoritative viewed flag for one anomaly.
    pub async fn toggle_viewed(&self, anomaly_number: u64) -> Result<()> {
        let client = reqwest::Client::builder()
            .timeout(self.config.health_timeout)
            .build()
            .map_err(|e| TriageError::RemoteToggle(e.to_string()))?;

        let url = self.viewed_endpoint(anomaly_number);
        tracing::debug!(%url, "toggling viewed flag");
        let response = client
            .patch(&url)
            .send()
            .await
            .map_err(|e| TriageError::RemoteToggle(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TriageError::RemoteToggle(service_error(status, &body)));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Blocking API
    // ------------------------------------------------------------------

    /// Blocking twin of [`AnalysisClient::health`].
    pub fn health_blocking(&self) -> Result<bool> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.health_timeout)
            .build()
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;

        match client.get(self.endpoint("/api/health")).send() {
            Ok(response) => match response.json::<HealthResponse>() {
                Ok(health) => Ok(health.status == "healthy"),
                Err(_) => Ok(false),
            },
            Err(_) => Ok(false),
        }
    }

    /// Blocking twin of [`AnalysisClient::run_analysis`].
    pub fn run_analysis_blocking(&self, files: &[PathBuf]) -> Result<Vec<AnomalyRecord>> {
        if !self.health_blocking()? {
            return Err(TriageError::AnalysisUnavailable(format!(
                "service at {} is not running",
                self.config.base_url
            )));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.upload_timeout)
            .build()
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;

        let mut form = reqwest::blocking::multipart::Form::new();
        for path in files {
            form = form
                .file("files", path)
                .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;
        }

        let response = client
            .post(self.endpoint("/api/upload"))
            .multipart(form)
            .send()
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;
        if !status.is_success() {
            return Err(TriageError::AnalysisUnavailable(service_error(
                status, &body,
            )));
        }
        let upload: UploadResponse = serde_json::from_str(&body)
            .map_err(|e| TriageError::AnalysisUnavailable(format!("bad upload response: {e}")))?;
        for warning in &upload.errors {
            tracing::warn!(%warning, "upload warning");
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.analyze_timeout)
            .build()
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;
        let response = client
            .post(self.endpoint("/api/analyze"))
            .send()
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| TriageError::AnalysisUnavailable(e.to_string()))?;
        if !status.is_success() {
            return Err(TriageError::AnalysisUnavailable(service_error(
                status, &body,
            )));
        }
        let analysis: AnalyzeResponse = serde_json::from_str(&body)
            .map_err(|e| TriageError::AnalysisUnavailable(format!("bad analyze response: {e}")))?;

        validate_records(&analysis.results)?;
        Ok(analysis.results)
    }

    /// Blocking twin of [`AnalysisClient::toggle_viewed`].
    pub fn toggle_viewed_blocking(&self, anomaly_number: u64) -> Result<()> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.health_timeout)
            .build()
            .map_err(|e| TriageError::RemoteToggle(e.to_string()))?;

        let response = client
            .patch(self.viewed_endpoint(anomaly_number))
            .send()
            .map_err(|e| TriageError::RemoteToggle(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TriageError::RemoteToggle(service_error(status, &body)));
        }
        Ok(())
    }
}

fn file_part(path: &Path) -> Result<reqwest::multipart::Part> {
    let bytes = std::fs::read(path)
        .map_err(|e| TriageError::AnalysisUnavailable(format!("{}: {e}", path.display())))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.csv".to_string());
    Ok(reqwest::multipart::Part::bytes(bytes).file_name(name))
}

impl ViewedStore for AnalysisClient {
    fn toggle_viewed(&self, anomaly_number: u64) -> Result<()> {
        self.toggle_viewed_blocking(anomaly_number)
    }
}

impl AnalysisService for AnalysisClient {
    fn run_analysis(&self, files: &[PathBuf]) -> Result<Vec<AnomalyRecord>> {
        self.run_analysis_blocking(files)
    }
}
