use crate::config::ReportConfig;
use crate::types::ResultReport;
use async_trait::async_trait;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed report: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Report unavailable: download failed and no cached copy at '{path}'")]
    Unavailable { path: String },
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Produces the raw report document. The HTTP implementation is the only
/// one shipped; tests substitute their own to exercise the fallback path.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch the report document as raw text.
    async fn fetch_raw(&self) -> ReportResult<String>;

    fn source_name(&self) -> &'static str;
}

/// Fetches the aggregated report with a single GET, no retries.
#[derive(Debug)]
pub struct HttpReportSource {
    client: reqwest::Client,
    url: String,
}

impl HttpReportSource {
    pub fn new(config: &ReportConfig) -> ReportResult<Self> {
        config
            .validate()
            .map_err(|message| ReportError::InvalidConfig { message })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn fetch_raw(&self) -> ReportResult<String> {
        debug!("Fetching report from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let body = response.error_for_status()?.text().await?;
        Ok(body)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}

/// Fetch the report, falling back to the local cache copy.
///
/// A successful fetch overwrites the cache so the next offline run can
/// still work. A malformed freshly-downloaded document is fatal rather
/// than a reason to fall back: silently reconciling against a stale cache
/// would misreport every category.
pub async fn fetch_or_cached(
    source: &dyn ReportSource,
    cache_path: &Path,
) -> ReportResult<ResultReport> {
    match source.fetch_raw().await {
        Ok(body) => {
            let report = ResultReport::from_json(&body)?;
            if let Err(e) = fs::write(cache_path, &body) {
                warn!(
                    "Could not update cache file '{}': {}",
                    cache_path.display(),
                    e
                );
            }
            info!(
                "Fetched report via {}: {} suites, {} entries",
                source.source_name(),
                report.suite_count(),
                report.entry_count()
            );
            Ok(report)
        }
        Err(e) => {
            warn!("Failed to download the report: {}", e);
            if !cache_path.exists() {
                return Err(ReportError::Unavailable {
                    path: cache_path.display().to_string(),
                });
            }
            info!("Using local file '{}'", cache_path.display());
            let body = fs::read_to_string(cache_path)?;
            Ok(ResultReport::from_json(&body)?)
        }
    }
}
