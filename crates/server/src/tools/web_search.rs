//! web_search tool implementation.
//!
//! The thin entry point over the cache-aside search layer: validate
//! parameters, pick the provider (Brave or mock) from configuration, and
//! run the orchestrator.

use curio_client::{BraveClient, BraveConfig, MockSearch, cached_search};
use curio_core::{AppConfig, CacheDb, Error, SearchResult};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for the web_search tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct WebSearchParams {
    /// Search query (required).
    pub query: String,

    /// Number of results (1-20, defaults to the configured result count).
    #[serde(default)]
    pub count: Option<u8>,
}

/// Output structure for the web_search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebSearchOutput {
    /// The query as submitted.
    pub query: String,

    /// Which provider produced (or originally produced) the results.
    pub provider: String,

    /// The search results, in provider order.
    pub results: Vec<SearchResult>,
}

/// Implementation of the web_search tool.
pub async fn search_impl(db: &CacheDb, config: &AppConfig, params: WebSearchParams) -> Result<CallToolResult, McpError> {
    if params.query.trim().is_empty() {
        return Err(Error::InvalidInput("query cannot be empty".into()).into());
    }

    let count = params.count.unwrap_or(config.result_count);
    if !(1..=20).contains(&count) {
        return Err(Error::InvalidInput(format!("invalid count: {count} (must be 1-20)")).into());
    }

    let ttl = config.cache_ttl_seconds();

    let (provider, results) = if config.mock_search {
        let results = cached_search(db, &MockSearch, &params.query, count, ttl, true).await?;
        ("mock", results)
    } else {
        let client = BraveClient::new(BraveConfig {
            api_key: config
                .require_brave_api_key()
                .map_err(|e| Error::Misconfigured(e.to_string()))?
                .to_string(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
            ..Default::default()
        })
        .map_err(Error::from)?;

        let results = cached_search(db, &client, &params.query, count, ttl, false).await?;
        ("brave", results)
    };

    let output = WebSearchOutput { query: params.query, provider: provider.to_string(), results };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("failed to serialize results: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
