//! MCP server handler
//!
//! [`DuetService`] answers `tools/list` with the single `query_dual_models`
//! descriptor and routes `tools/call` to [`QueryModelsUseCase`]. Every call is
//! independent; a failed call becomes a JSON-RPC error and the server keeps
//! serving.

use crate::mcp::tool::{self, TOOL_NAME, ToolCallError};
use crate::output::formatter::TextFormatter;
use duet_application::{LlmGateway, QueryModelsUseCase};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use tracing::{debug, info, warn};

/// MCP service exposing the dual-model query tool
pub struct DuetService<G: LlmGateway + 'static> {
    use_case: QueryModelsUseCase<G>,
}

impl<G: LlmGateway + 'static> Clone for DuetService<G> {
    fn clone(&self) -> Self {
        Self {
            use_case: self.use_case.clone(),
        }
    }
}

impl<G: LlmGateway + 'static> DuetService<G> {
    pub fn new(use_case: QueryModelsUseCase<G>) -> Self {
        Self { use_case }
    }

    /// Tools advertised to clients
    pub fn tools(&self) -> Vec<Tool> {
        vec![tool::descriptor()]
    }

    /// Handle one tool call
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<CallToolResult, ToolCallError> {
        if name != TOOL_NAME {
            return Err(ToolCallError::UnknownTool(name.to_string()));
        }

        let input = tool::parse_arguments(arguments)?;
        debug!(
            "Tool call {} (prompt: {} chars, system override: {})",
            name,
            input.prompt.chars().count(),
            input.system_prompt.is_some()
        );

        let result = self.use_case.execute(input).await?;
        let text = TextFormatter::format(&result);

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

impl<G: LlmGateway + 'static> ServerHandler for DuetService<G> {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        info!("Tool call received: {}", request.name);

        self.invoke(&request.name, request.arguments.as_ref())
            .await
            .map_err(|e| {
                warn!("Tool call {} failed: {}", request.name, e);
                e.into()
            })
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "duet-mcp".to_string(),
                title: Some("Duet".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(format!(
                "Call {} with a prompt to get answers from {} models side by side.",
                TOOL_NAME,
                self.use_case.config().backends.len()
            )),
            ..Default::default()
        }
    }
}
