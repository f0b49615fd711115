// weather-tools-server/src/message_handler.rs
use crate::registry::ToolRegistry;
use crate::traits::MessageHandler;
use futures::future::BoxFuture;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn, Instrument};
use weather_tools_common::{
    CallToolParams, CallToolResult, ListToolsResult, RpcRequest, RpcResponse, Tool, ToolError, ToolParams,
    INVALID_PARAMS, INVALID_REQUEST, PARSE_ERROR,
};

/// Dispatches JSON-RPC messages to registered tools.
pub struct ToolMessageHandler {
    tools: Arc<ToolRegistry>,
}

impl ToolMessageHandler {
    pub fn new(tools: Arc<ToolRegistry>) -> Self {
        Self { tools }
    }

    pub async fn process_message(&self, message: &str) -> RpcResponse {
        let raw: Value = match serde_json::from_str(message) {
            Ok(v) => v,
            Err(e) => {
                error!("Parse error: {}", e);
                return RpcResponse::failure(Value::Null, PARSE_ERROR, format!("Parse error: {}", e));
            }
        };
        let id = raw.get("id").cloned().unwrap_or(Value::Null);
        let req: RpcRequest = match serde_json::from_value(raw) {
            Ok(r) => r,
            Err(e) => {
                warn!("Invalid request: {}", e);
                return RpcResponse::failure(id, INVALID_REQUEST, format!("Invalid Request: {}", e));
            }
        };

        let span = tracing::info_span!("rpc", id = %req.id, method = %req.method);
        self.dispatch(req).instrument(span).await
    }

    async fn dispatch(&self, req: RpcRequest) -> RpcResponse {
        info!("Processing");
        let method = req.method.clone();
        match method.as_str() {
            "tools/list" => {
                let result = ListToolsResult { tools: self.tools.descriptions() };
                RpcResponse::success(req.id, json!(result))
            }
            "tools/call" => self.handle_call_tool(req).await,
            "ping" => RpcResponse::success(req.id, json!({})),
            method => match self.tools.get(method) {
                Some(tool) => match invoke(tool.as_ref(), req.params.as_ref()).await {
                    Ok(text) => RpcResponse::success(req.id, text),
                    Err(e) => {
                        warn!("Tool {} failed: {}", method, e);
                        e.into_response(req.id)
                    }
                },
                None => {
                    warn!("Method not found: {}", method);
                    ToolError::UnsupportedMethod(method.to_string()).into_response(req.id)
                }
            },
        }
    }

    async fn handle_call_tool(&self, req: RpcRequest) -> RpcResponse {
        let call: CallToolParams = match req.params.clone().map(serde_json::from_value::<CallToolParams>) {
            Some(Ok(call)) => call,
            _ => return RpcResponse::failure(req.id, INVALID_PARAMS, "Invalid params for tools/call"),
        };
        let Some(tool) = self.tools.get(&call.name) else {
            warn!("Tool not found: {}", call.name);
            return ToolError::UnsupportedMethod(call.name).into_response(req.id);
        };
        match invoke(tool.as_ref(), call.arguments.as_ref()).await {
            Ok(text) => RpcResponse::success(req.id, json!(CallToolResult::text(text))),
            Err(e) => {
                warn!("Tool {} failed: {}", call.name, e);
                e.into_response(req.id)
            }
        }
    }
}

/// Validate params against the tool's required list, then call it.
pub async fn invoke(tool: &dyn Tool, params: Option<&Value>) -> Result<String, ToolError> {
    let params = ToolParams::from_value(params)?;
    for name in tool.required_params() {
        params.require(name)?;
    }
    tool.call(&params).await
}

impl MessageHandler for ToolMessageHandler {
    fn handle_message<'a>(&'a self, message: String) -> BoxFuture<'a, String> {
        Box::pin(async move { self.process_message(&message).await.to_json() })
    }
}
