use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Where the aggregated result report lives and how to fetch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// URL of the aggregated result document.
    pub url: String,
    /// Local fallback copy, read when the download fails and overwritten
    /// after every successful fetch.
    pub cache_path: PathBuf,
    /// Timeout for the single GET request.
    pub timeout: Duration,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            url: "https://raw.githubusercontent.com/uutils/coreutils-tracking/main/aggregated-result.json"
                .to_string(),
            cache_path: PathBuf::from("result.json"),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_cache_path(mut self, cache_path: impl Into<PathBuf>) -> Self {
        self.cache_path = cache_path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Report URL cannot be empty".to_string());
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err("Report URL must start with http:// or https://".to_string());
        }

        if self.cache_path.as_os_str().is_empty() {
            return Err("Cache path cannot be empty".to_string());
        }

        if self.timeout.is_zero() {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
