//! MCP server handler implementation.
//!
//! This module defines the main server handler that routes tool calls to
//! the appropriate implementations. The cache handle and configuration are
//! injected here and threaded into every tool.

use crate::tools::cache_get::{CacheGetParams, cache_get_impl};
use crate::tools::web_search::{WebSearchParams, search_impl};

use curio_core::{AppConfig, CacheDb};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for curio.
#[derive(Clone)]
pub struct CurioServer {
    db: CacheDb,
    config: AppConfig,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler
/// methods.
#[tool_router]
impl CurioServer {
    /// Create a new server handler over a shared cache handle.
    pub fn new(db: CacheDb, config: AppConfig) -> Self {
        Self { db, config, tool_router: Self::tool_router() }
    }

    /// Answer a research query with web search results.
    ///
    /// Results are served from the time-bounded cache when possible; a miss
    /// triggers one provider call and refreshes the cache.
    #[tool(
        description = "Answer a research query with web search results, served from a time-bounded cache when possible."
    )]
    async fn web_search(&self, params: Parameters<WebSearchParams>) -> Result<CallToolResult, McpError> {
        search_impl(&self.db, &self.config, params.0).await
    }

    /// Inspect the cache row for a query.
    #[tool(description = "Inspect the cache row for a query: original query, provider, expiry, and hit count.")]
    async fn cache_get(&self, params: Parameters<CacheGetParams>) -> Result<CallToolResult, McpError> {
        cache_get_impl(&self.db, params.0).await
    }
}

impl ServerHandler for CurioServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "curio".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
