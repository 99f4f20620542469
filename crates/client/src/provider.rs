//! Search provider abstraction.
//!
//! The orchestrator talks to providers only through [`SearchProvider`], so
//! tests can substitute a stub and the cache layer never learns which
//! backend produced a result beyond its name.

use async_trait::async_trait;
use curio_core::{Error, SearchResult};
use std::sync::Arc;

/// Errors from a search provider client.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// No API key configured for the provider.
    #[error("missing API key for search provider")]
    MissingApiKey,

    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid count parameter (must be 1-20).
    #[error("invalid count: must be 1-20")]
    InvalidCount,

    /// Invalid offset parameter (must be 0-9).
    #[error("invalid offset: must be 0-9")]
    InvalidOffset,

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Non-success HTTP response from the provider.
    #[error("provider HTTP error: {status}")]
    HttpError { status: u16 },

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { ProviderError::Timeout } else { ProviderError::Network(Arc::new(err)) }
    }
}

/// Map a provider failure into the caller-facing error taxonomy.
///
/// Transport-level failures become "provider unreachable"; everything the
/// provider itself answered (bad status, undecodable body) becomes
/// "provider error"; a missing credential is a configuration problem.
impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingApiKey => Error::Misconfigured(err.to_string()),
            ProviderError::InvalidQuery(msg) => Error::InvalidInput(msg),
            ProviderError::InvalidCount | ProviderError::InvalidOffset => Error::InvalidInput(err.to_string()),
            ProviderError::Timeout | ProviderError::Network(_) => Error::ProviderUnreachable(err.to_string()),
            ProviderError::HttpError { .. } | ProviderError::Parse(_) => Error::ProviderFailure(err.to_string()),
        }
    }
}

/// A web search backend.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Stable identifier recorded alongside cached results (e.g. "brave").
    fn name(&self) -> &'static str;

    /// Fetch up to `count` results for `query`, in provider order.
    async fn fetch(&self, query: &str, count: u8) -> Result<Vec<SearchResult>, ProviderError>;
}
