//! Brave Search API client.
//!
//! ### API
//!
//! - **Endpoint**: `https://api.search.brave.com/res/v1/web/search`
//! - **Authentication**: `X-Subscription-Token` header.
//! - **Rate limiting**: minimum 1s interval between requests (free tier).
//! - **Mapping**: upstream `{title, url, description}` items become
//!   `SearchResult { title, url, snippet }`; missing fields stay absent.
//!
//! One request per search, no internal retries: a failed attempt is
//! reported to the caller with its category intact.

pub mod request;
pub mod response;

pub use request::SearchRequest;

use crate::provider::{ProviderError, SearchProvider};
use async_trait::async_trait;
use curio_core::SearchResult;
use reqwest::header;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Default base URL for the Brave Search API.
const DEFAULT_BASE_URL: &str = "https://api.search.brave.com/res/v1";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "curio/0.1";

/// Minimum interval between requests (1 second for the free tier).
const MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(1);

/// Brave API client configuration.
#[derive(Debug, Clone)]
pub struct BraveConfig {
    /// Subscription token.
    pub api_key: String,
    /// Base URL (default: https://api.search.brave.com/res/v1).
    pub base_url: String,
    /// Request timeout (default: 20s).
    pub timeout: Duration,
    /// User-agent string.
    pub user_agent: String,
}

impl Default for BraveConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Rate limiter to enforce request intervals.
#[derive(Debug)]
struct RateLimiter {
    last_request: Mutex<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Mutex::new(Instant::now().checked_sub(min_interval).unwrap_or_else(Instant::now)),
            min_interval,
        }
    }

    /// Acquire permission to make a request, waiting if necessary.
    async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < self.min_interval {
            tokio::time::sleep(self.min_interval - elapsed).await;
        }
        *last = Instant::now();
    }
}

/// Brave Search API client.
#[derive(Debug, Clone)]
pub struct BraveClient {
    http: reqwest::Client,
    config: BraveConfig,
    rate_limiter: Arc<RateLimiter>,
}

impl BraveClient {
    /// Create a new Brave client with the given configuration.
    ///
    /// Fails fast with `MissingApiKey` before any network activity when no
    /// credential is configured.
    pub fn new(config: BraveConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Network(Arc::new(e)))?;

        Ok(Self { http, config, rate_limiter: Arc::new(RateLimiter::new(MIN_REQUEST_INTERVAL)) })
    }

    /// Execute a web search request.
    pub async fn search(&self, req: SearchRequest) -> Result<Vec<SearchResult>, ProviderError> {
        req.validate()?;

        self.rate_limiter.acquire().await;

        let start = Instant::now();
        let url = format!("{}/web/search", self.config.base_url);

        tracing::debug!(query = %req.q, "searching Brave API");

        let http_response = self
            .http
            .get(&url)
            .header("X-Subscription-Token", &self.config.api_key)
            .header("Accept", "application/json")
            .header(header::USER_AGENT, &self.config.user_agent)
            .query(&req)
            .send()
            .await
            .map_err(ProviderError::from)?;

        let status = http_response.status();
        tracing::debug!(%status, "Brave API response");

        if status.is_client_error() || status.is_server_error() {
            return Err(ProviderError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response
            .bytes()
            .await
            .map_err(ProviderError::from)?;
        let api_response: response::BraveApiResponse =
            serde_json::from_slice(&bytes).map_err(|e| ProviderError::Parse(e.to_string()))?;

        let results = api_response.into_results();
        tracing::debug!("search completed in {:?}, {} results", start.elapsed(), results.len());

        Ok(results)
    }
}

#[async_trait]
impl SearchProvider for BraveClient {
    fn name(&self) -> &'static str {
        "brave"
    }

    async fn fetch(&self, query: &str, count: u8) -> Result<Vec<SearchResult>, ProviderError> {
        self.search(SearchRequest { q: query.to_string(), count: Some(count), ..Default::default() })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new_missing_key() {
        let config = BraveConfig::default();
        let result = BraveClient::new(config);
        assert!(matches!(result, Err(ProviderError::MissingApiKey)));
    }

    #[test]
    fn test_client_new_with_key() {
        let config = BraveConfig { api_key: "test-key".into(), ..Default::default() };
        let client = BraveClient::new(config).unwrap();
        assert_eq!(client.name(), "brave");
    }

    #[tokio::test]
    async fn test_invalid_request_fails_before_network() {
        // Base URL points nowhere; validation must reject the request first.
        let config = BraveConfig {
            api_key: "test-key".into(),
            base_url: "http://127.0.0.1:1".into(),
            ..Default::default()
        };
        let client = BraveClient::new(config).unwrap();

        let result = client.fetch("", 5).await;
        assert!(matches!(result, Err(ProviderError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        let config = BraveConfig {
            api_key: "test-key".into(),
            base_url: "http://127.0.0.1:1".into(),
            timeout: Duration::from_millis(500),
            ..Default::default()
        };
        let client = BraveClient::new(config).unwrap();

        let result = client.fetch("cats", 5).await;
        assert!(matches!(result, Err(ProviderError::Network(_)) | Err(ProviderError::Timeout)));
    }
}
