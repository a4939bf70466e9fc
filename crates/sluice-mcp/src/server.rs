//! MCP server implementation.
//!
//! This module contains the main server setup using rmcp.

use crate::error::Error;
use crate::models::AnalyzeParams;
use crate::tools::Tools;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::transport::stdio;
use rmcp::{
    handler::server::ServerHandler, tool, tool_handler, tool_router, ErrorData as McpError,
    ServiceExt,
};
use std::sync::Arc;

/// The sluice MCP server.
///
/// Provides MCP protocol handling over stdio transport.
#[derive(Clone)]
pub struct SluiceMcpServer {
    /// Tool implementations.
    tools: Arc<Tools>,
    /// Tool router for MCP dispatch.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SluiceMcpServer {
    /// Liveness probe.
    #[tool(
        description = "Liveness probe. Returns a fixed acknowledgment payload to confirm the server is responsive."
    )]
    async fn ping(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::json(
            self.tools.ping(),
        )?]))
    }

    /// Analyze a submitted pipeline graph.
    #[tool(
        description = "Analyze a pipeline graph: count its nodes and edges and report whether the directed edges form an acyclic graph (DAG)."
    )]
    async fn analyze_pipeline(
        &self,
        Parameters(params): Parameters<AnalyzeParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::json(
            self.tools.analyze(params),
        )?]))
    }
}

impl SluiceMcpServer {
    /// Create a new sluice MCP server.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: Arc::new(Tools::new()),
            tool_router: Self::tool_router(),
        }
    }

    /// Serve MCP requests over stdio until the client disconnects.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails during initialization or
    /// while the service is running.
    pub async fn run(self) -> crate::Result<()> {
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| Error::Mcp(e.to_string()))?;
        service
            .waiting()
            .await
            .map_err(|e| Error::Mcp(e.to_string()))?;
        Ok(())
    }
}

impl Default for SluiceMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for SluiceMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sluice-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Sluice MCP server for pipeline graph analysis. Submit nodes and edges to analyze_pipeline for a DAG verdict."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::handler::server::ServerHandler;

    #[test]
    fn test_server_info() {
        let server = SluiceMcpServer::new();
        let info = server.get_info();
        assert_eq!(info.server_info.name, "sluice-mcp");
        assert!(!info.server_info.version.is_empty());
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_tool_router_has_all_tools() {
        let server = SluiceMcpServer::new();
        // Access the tool_router directly to list tools
        let tools = server.tool_router.list_all();

        // Verify all expected tools are registered
        let tool_names: Vec<&str> = tools.iter().map(|t| &*t.name).collect();

        assert!(tool_names.contains(&"ping"));
        assert!(tool_names.contains(&"analyze_pipeline"));
        assert_eq!(tools.len(), 2);
    }
}
