//! cache_get tool implementation.
//!
//! Read-only inspection of a query's cache row. The hit counter is an
//! observability value; this tool never modifies it.

use curio_core::{CacheDb, CacheMeta, Error, normalize};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the cache_get tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheGetParams {
    /// The query whose cache row to inspect (raw form; normalized
    /// internally).
    pub query: String,
}

/// Output from the cache_get tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheGetOutput {
    /// The cache row metadata, expired rows included.
    pub meta: CacheMeta,
}

/// Implementation of the cache_get tool.
pub async fn cache_get_impl(db: &CacheDb, params: CacheGetParams) -> Result<CallToolResult, McpError> {
    let normalized = normalize(&params.query);

    let meta = db
        .search_meta(&normalized)
        .await?
        .ok_or_else(|| Error::CacheMiss(normalized))?;

    let output = CacheGetOutput { meta };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("failed to serialize cache row: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
