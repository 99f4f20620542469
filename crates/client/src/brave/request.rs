//! Brave Search API request parameters and validation.

use serde::Serialize;

/// Query parameters for the Brave Web Search API.
///
/// Based on Brave Web Search API documentation:
/// https://api-dashboard.search.brave.com/app/documentation/web-search/get-started
#[derive(Debug, Clone, Serialize, Default)]
pub struct SearchRequest {
    /// Search query (required, max 400 chars / 50 words).
    pub q: String,

    /// Number of results (1-20, default 20).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u8>,

    /// Page offset (0-9, default 0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u8>,

    /// Country code (ISO 3166-1 alpha-2, e.g., "US").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Content language (ISO 639-1, e.g., "en").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_lang: Option<String>,
}

impl SearchRequest {
    /// Validate the request parameters against Brave's documented limits.
    pub fn validate(&self) -> Result<(), crate::provider::ProviderError> {
        use crate::provider::ProviderError;

        if self.q.is_empty() {
            return Err(ProviderError::InvalidQuery("query cannot be empty".to_string()));
        }

        if self.q.len() > 400 {
            return Err(ProviderError::InvalidQuery(format!(
                "query too long: {} chars (max 400)",
                self.q.len()
            )));
        }

        let word_count = self.q.split_whitespace().count();
        if word_count > 50 {
            return Err(ProviderError::InvalidQuery(format!(
                "query too long: {} words (max 50)",
                word_count
            )));
        }

        if let Some(count) = self.count
            && !(1..=20).contains(&count)
        {
            return Err(ProviderError::InvalidCount);
        }

        if let Some(offset) = self.offset
            && offset > 9
        {
            return Err(ProviderError::InvalidOffset);
        }

        Ok(())
    }
}
