//! Local Notify MCP Server
//!
//! Exposes a single `local-notify` tool to AI assistants via the Model
//! Context Protocol. Implements MCP JSON-RPC over stdio and fulfills tool
//! calls by shelling out to the native macOS dialog utility.

use thiserror::Error;

pub mod dialog;
pub mod protocol;
pub mod server;
pub mod service;
pub mod tools;

/// MCP Protocol version
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name
pub const SERVER_NAME: &str = "local-notify-mcp";

/// Server version
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Error, Debug)]
pub enum McpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Invalid params: {0}")]
    InvalidParams(String),
}

impl McpError {
    /// JSON-RPC error code this failure is reported with.
    pub fn code(&self) -> i32 {
        match self {
            McpError::UnknownTool(_) | McpError::InvalidParams(_) => protocol::INVALID_PARAMS,
            McpError::Io(_) | McpError::Json(_) => protocol::INTERNAL_ERROR,
        }
    }
}
