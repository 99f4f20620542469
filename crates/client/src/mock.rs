//! Deterministic offline search provider.
//!
//! Used for testing and demos without external dependency or cost.

use crate::provider::{ProviderError, SearchProvider};
use async_trait::async_trait;
use curio_core::SearchResult;

/// One synthetic result derived from the input query.
///
/// Deterministic and free of I/O; the URL embeds the literal query.
pub fn results(query: &str) -> Vec<SearchResult> {
    vec![SearchResult {
        title: Some(query.to_string()),
        url: Some(format!("https://www.nevergonnagiveyouup.com/{query}")),
        snippet: Some("tudududududuududududududu".to_string()),
    }]
}

/// Search provider that serves [`results`] without touching the network.
///
/// With the orchestrator's mock flag off, this still exercises the full
/// cache path, storing entries under the provider name "mock".
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSearch;

#[async_trait]
impl SearchProvider for MockSearch {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch(&self, query: &str, _count: u8) -> Result<Vec<SearchResult>, ProviderError> {
        Ok(results(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_result_embeds_query() {
        let synthetic = results("cats");
        assert_eq!(synthetic.len(), 1);
        assert_eq!(synthetic[0].title.as_deref(), Some("cats"));
        assert!(synthetic[0].url.as_deref().unwrap().contains("cats"));
        assert!(synthetic[0].snippet.is_some());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(results("same query"), results("same query"));
    }

    #[tokio::test]
    async fn test_provider_impl_matches_results() {
        let provider = MockSearch;
        assert_eq!(provider.name(), "mock");
        let fetched = provider.fetch("rust caching", 5).await.unwrap();
        assert_eq!(fetched, results("rust caching"));
    }
}
