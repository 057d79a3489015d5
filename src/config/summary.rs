//! Summary service configuration

use reqwest::header::HeaderValue;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::{PLUGIN_ABOUT_URL, PLUGIN_TITLE};

/// Wikipedia summary service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    /// Base URL of the Wikipedia REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL of the human-facing search page linked from the menu
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,

    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SummaryConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate summary service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.api_base_url) {
            return Err(ValidationError::InvalidApiUrl);
        }
        if !is_http_url(&self.search_base_url) {
            return Err(ValidationError::InvalidSearchUrl);
        }
        if self.user_agent.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SUMMARY__USER_AGENT"));
        }
        // The HTTP client refuses to build with a header it cannot send
        if HeaderValue::from_str(&self.user_agent).is_err() {
            return Err(ValidationError::InvalidUserAgent);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            search_base_url: default_search_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn default_api_base_url() -> String {
    "https://en.wikipedia.org/api/rest_v1".to_string()
}

fn default_search_base_url() -> String {
    "https://en.wikipedia.org/w/index.php".to_string()
}

fn default_user_agent() -> String {
    format!(
        "{}/{} (+{})",
        PLUGIN_TITLE.replace(' ', "-"),
        env!("CARGO_PKG_VERSION"),
        PLUGIN_ABOUT_URL
    )
}

fn default_timeout() -> u64 {
    10
}
