//! Brave Search API response types and mapping.

use curio_core::SearchResult;
use serde::Deserialize;

/// Raw response from the Brave Web Search API.
///
/// Only the parts this backend consumes are modelled; unknown fields are
/// ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct BraveApiResponse {
    #[serde(default)]
    pub web: Option<WebResults>,
}

/// Web search results container.
#[derive(Debug, Deserialize)]
pub struct WebResults {
    #[serde(default)]
    pub results: Vec<WebResult>,
}

/// Individual web search result from Brave.
///
/// Every field is optional upstream; a missing field is absent, not an
/// error.
#[derive(Debug, Deserialize)]
pub struct WebResult {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl BraveApiResponse {
    /// Map upstream items into the internal result shape, in upstream
    /// order. A missing `web` object maps to an empty list.
    pub fn into_results(self) -> Vec<SearchResult> {
        self.web
            .map(|w| {
                w.results
                    .into_iter()
                    .map(|r| SearchResult { title: r.title, url: r.url, snippet: r.description })
                    .collect()
            })
            .unwrap_or_default()
    }
}
