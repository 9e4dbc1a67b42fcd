//! MCP request handlers.

use serde_json::{json, Value};

use crate::dialog::DialogInvoker;
use crate::protocol::{JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND};
use crate::tools::{tool_descriptors, ToolResult, TOOL_NAME};
use crate::{McpError, PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};

/// Local-notify MCP server: owns the dialog invoker and maps JSON-RPC
/// requests onto it.
pub struct NotifyServer {
    invoker: DialogInvoker,
}

impl Default for NotifyServer {
    fn default() -> Self {
        Self::new(DialogInvoker::default())
    }
}

impl NotifyServer {
    pub fn new(invoker: DialogInvoker) -> Self {
        Self { invoker }
    }

    /// Handle initialize request
    fn handle_initialize(&self, _params: Value) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION
            },
            "instructions": "Shows native dialogs on the host machine. Call local-notify with the text to display and an optional title."
        })
    }

    /// Handle tools/list request
    fn handle_tools_list(&self) -> Value {
        json!({
            "tools": tool_descriptors()
        })
    }

    /// Handle tools/call request.
    ///
    /// Validation failures (unknown tool, missing `text`) are protocol
    /// errors and never reach the dialog invoker; a failing dialog command
    /// comes back as an `isError` result payload.
    async fn handle_tools_call(&self, params: Value) -> Result<Value, McpError> {
        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::InvalidParams("Missing tool name".to_string()))?;

        if name != TOOL_NAME {
            return Err(McpError::UnknownTool(name.to_string()));
        }

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        let text = arguments
            .get("text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::InvalidParams("Missing required argument: text".to_string()))?;
        let title = arguments.get("title").and_then(|v| v.as_str()).unwrap_or("");

        log::debug!("Calling tool: {} with title {:?}", TOOL_NAME, title);

        let result = match self.invoker.show(title, text).await {
            Ok(()) => ToolResult::success("Complete"),
            Err(e) => ToolResult::error(format!("Failed to show notification: {}", e)),
        };
        Ok(serde_json::to_value(result)?)
    }

    /// Handle a single JSON-RPC request
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        log::debug!("Handling request: {}", request.method);

        match request.method.as_str() {
            "initialize" => {
                let result = self.handle_initialize(request.params);
                Some(JsonRpcResponse::success(request.id, result))
            }
            "initialized" | "notifications/initialized" => {
                // Notification, no response needed
                None
            }
            "tools/list" => {
                let result = self.handle_tools_list();
                Some(JsonRpcResponse::success(request.id, result))
            }
            "tools/call" => match self.handle_tools_call(request.params).await {
                Ok(result) => Some(JsonRpcResponse::success(request.id, result)),
                Err(e) => Some(JsonRpcResponse::error(request.id, e.code(), &e.to_string())),
            },
            "ping" => Some(JsonRpcResponse::success(request.id, json!({}))),
            _ => {
                log::warn!("Unknown method: {}", request.method);
                Some(JsonRpcResponse::error(
                    request.id,
                    METHOD_NOT_FOUND,
                    &format!("Method not found: {}", request.method),
                ))
            }
        }
    }
}
