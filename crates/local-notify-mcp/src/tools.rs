//! Tool registry: the single `local-notify` descriptor and result payloads.

use serde::Serialize;
use serde_json::{json, Value};

/// Name of the only tool this server exposes.
pub const TOOL_NAME: &str = "local-notify";

/// Tool definition for MCP
#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Content block in a tool result
#[derive(Debug, Serialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

/// Result payload of a `tools/call` invocation.
///
/// Operation failures travel here with `is_error` set; only validation
/// failures use the JSON-RPC error channel.
#[derive(Debug, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self::text(text.into(), false)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::text(text.into(), true)
    }

    fn text(text: String, is_error: bool) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text".to_string(),
                text,
            }],
            is_error,
        }
    }
}

/// Get list of available tools
pub fn tool_descriptors() -> Vec<Tool> {
    vec![Tool {
        name: TOOL_NAME.to_string(),
        description: "Shows a dialog with this text".to_string(),
        input_schema: json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Text to include in the dialog"
                },
                "title": {
                    "type": "string",
                    "description": "Title of the dialog (optional)"
                }
            },
            "required": ["text"],
            "additionalProperties": false
        }),
    }]
}
