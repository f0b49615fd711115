// weather-tools-common/src/lib.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Define modules
pub mod error;
pub mod plugin;
pub mod tool;

// Re-export for convenience
pub use error::ToolError;
pub use plugin::{Plugin, PluginResponse};
pub use tool::{scalar_text, Tool, ToolParams};

// --- Protocol Constants ---
pub const JSONRPC_VERSION: &str = "2.0";

// --- Error Codes ---
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const UPSTREAM_ERROR: i32 = -32000;

// --- JSON-RPC Base Types ---
pub fn default_jsonrpc() -> String { JSONRPC_VERSION.to_string() }

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value, // String, Number, or Null
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RpcRequest {
    pub fn new(id: Value, method: impl Into<String>, params: Option<Value>) -> Self {
        RpcRequest { jsonrpc: default_jsonrpc(), id, method: method.into(), params }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcResponse {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcResponse {
    pub fn success(id: Value, result: impl Into<Value>) -> Self {
        RpcResponse { jsonrpc: default_jsonrpc(), result: Some(result.into()), error: None, id }
    }

    pub fn failure(id: Value, code: i32, message: impl Into<String>) -> Self {
        RpcResponse {
            jsonrpc: default_jsonrpc(),
            result: None,
            error: Some(RpcError { code, message: message.into() }),
            id,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Serialize to the JSON text sent over the wire.
    pub fn to_json(&self) -> String {
        // An envelope of plain strings and Values cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }
}

// --- Tool Listing ---
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListToolsResult {
    pub tools: Vec<ToolDescription>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PluginDescription {
    pub name: String,
    pub description: String,
}

// --- Tool Call ---
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CallToolParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentItem {
    Text { text: String },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<ContentItem>,
    #[serde(default)]
    pub is_error: bool,
}

impl CallToolResult {
    pub fn text(text: String) -> Self {
        CallToolResult { content: vec![ContentItem::Text { text }], is_error: false }
    }

    /// Concatenated text of all content items.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(|item| match item {
                ContentItem::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
