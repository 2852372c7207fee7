//! Configuration for the PubMed E-utilities client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the NCBI E-utilities endpoints.
    pub const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Default maximum number of record IDs returned by one search.
    pub const DEFAULT_RETMAX: usize = 100;

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Characters of a response body shown in debug logs.
    pub const DEBUG_BODY_PREVIEW: usize = 500;
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// NCBI API key (optional, raises server-side rate limits).
    pub api_key: Option<String>,

    /// Base URL for the E-utilities endpoints (overridable for mock servers).
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Maximum number of record IDs requested from the search endpoint.
    pub retmax: usize,
}

impl Config {
    /// Create a new configuration with an optional NCBI API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: api::EUTILS_BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            retmax: api::DEFAULT_RETMAX,
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            retmax: api::DEFAULT_RETMAX,
        }
    }

    /// Create configuration from environment variables (`NCBI_API_KEY`).
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var("NCBI_API_KEY").ok())
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.base_url, api::EUTILS_BASE_URL);
        assert_eq!(config.retmax, 100);
    }

    #[test]
    fn test_config_with_api_key() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_config_for_testing_overrides_base_url() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert!(!config.has_api_key());
    }
}
