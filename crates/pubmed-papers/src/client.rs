//! PubMed E-utilities API client.
//!
//! One search call (ESearch, JSON) and one batched fetch call (EFetch, XML)
//! per run. Requests are issued strictly sequentially with no retries and no
//! pagination beyond a single bounded page.

use reqwest::Client;
use serde::Deserialize;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::extract;
use crate::models::PaperRow;

/// ESearch JSON envelope.
#[derive(Debug, Deserialize)]
struct ESearchResponse {
    esearchresult: ESearchResult,
}

/// The identifier list is required; its absence is a protocol error.
#[derive(Debug, Deserialize)]
struct ESearchResult {
    idlist: Vec<String>,
}

/// Client for the NCBI E-utilities endpoints.
#[derive(Clone)]
pub struct PubMedClient {
    /// Configured HTTP client.
    client: Client,

    /// Base URL for the E-utilities endpoints.
    base_url: String,

    /// NCBI API key (optional).
    api_key: Option<String>,

    /// Result-count bound passed to the search endpoint.
    retmax: usize,
}

impl PubMedClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
            retmax: config.retmax,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for record IDs matching `query`.
    ///
    /// Returns at most `retmax` IDs; zero matches yield an empty list.
    ///
    /// # Errors
    ///
    /// `Transport` on network/HTTP failure, `Protocol` if the response lacks
    /// the identifier list.
    pub async fn search(&self, query: &str) -> ClientResult<Vec<String>> {
        let url = format!("{}/esearch.fcgi", self.base_url);
        let mut params = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("term".to_string(), query.to_string()),
            ("retmax".to_string(), self.retmax.to_string()),
            ("retmode".to_string(), "json".to_string()),
        ];
        self.push_api_key(&mut params);

        let body = self.get_text(&url, &params, "esearch").await?;
        let response: ESearchResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::protocol("esearch", e.to_string()))?;

        Ok(response.esearchresult.idlist)
    }

    /// Fetch article details for `ids` and extract one row per record.
    ///
    /// Empty input returns immediately without a network call. Records that
    /// fail extraction are skipped with a debug log; the rest of the batch
    /// is kept.
    ///
    /// # Errors
    ///
    /// `Transport` on network/HTTP failure, `Protocol` if the response is not
    /// a well-formed article set document.
    pub async fn fetch_details(&self, ids: &[String]) -> ClientResult<Vec<PaperRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/efetch.fcgi", self.base_url);
        let mut params = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("id".to_string(), ids.join(",")),
            ("retmode".to_string(), "xml".to_string()),
        ];
        self.push_api_key(&mut params);

        let body = self.get_text(&url, &params, "efetch").await?;
        let fragments = extract::split_article_set(&body)
            .map_err(|e| ClientError::protocol("efetch", e.to_string()))?;

        let mut rows = Vec::new();
        for fragment in fragments {
            match extract::parse_record(&fragment).and_then(extract::extract) {
                Ok(row) => rows.push(row),
                Err(err) => tracing::debug!(error = %err, "skipping malformed record"),
            }
        }

        Ok(rows)
    }

    /// Issue a GET request and return the response body as text.
    async fn get_text(
        &self,
        url: &str,
        params: &[(String, String)],
        endpoint: &'static str,
    ) -> ClientResult<String> {
        let response = self.client.get(url).query(params).send().await?;
        tracing::debug!(endpoint, url = %response.url(), "request sent");

        let response = response.error_for_status()?;
        let body = response.text().await?;
        tracing::debug!(endpoint, preview = body_preview(&body), "response received");

        Ok(body)
    }

    /// Append the API key query parameter when one is configured.
    fn push_api_key(&self, params: &mut Vec<(String, String)>) {
        if let Some(key) = &self.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }
    }
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.has_api_key())
            .field("retmax", &self.retmax)
            .finish()
    }
}

/// Leading slice of a response body for debug logs, at most
/// [`api::DEBUG_BODY_PREVIEW`] characters and never splitting a code point.
fn body_preview(body: &str) -> &str {
    let end = body
        .char_indices()
        .nth(api::DEBUG_BODY_PREVIEW)
        .map_or(body.len(), |(index, _)| index);
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_succeeds() {
        assert!(PubMedClient::new(Config::default()).is_ok());
    }

    #[test]
    fn test_client_reports_api_key_status() {
        let client = PubMedClient::new(Config::new(Some("key".to_string()))).unwrap();
        assert!(client.has_api_key());

        let client = PubMedClient::new(Config::default()).unwrap();
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_client_debug_hides_api_key() {
        let client = PubMedClient::new(Config::new(Some("super-secret-key".to_string()))).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("has_api_key"));
    }

    #[test]
    fn test_body_preview_truncates_long_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(body_preview(&body).len(), 500);

        let short = "short body";
        assert_eq!(body_preview(short), short);
    }
}
