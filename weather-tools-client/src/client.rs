// weather-tools-client/src/client.rs
use reqwest::Client as ReqwestClient;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt;
use tracing::debug;
use url::Url;
use weather_tools_common::{
    CallToolParams, CallToolResult, ListToolsResult, PluginDescription, RpcRequest, RpcResponse,
};

pub type BoxedError = Box<dyn Error + Send + Sync>;

/// A JSON-RPC error returned by the server.
#[derive(Debug)]
pub struct RemoteError {
    pub code: i32,
    pub message: String,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error {}: {}", self.code, self.message)
    }
}

impl Error for RemoteError {}

pub struct ToolsClient {
    http: ReqwestClient,
    base_url: Url,
}

impl ToolsClient {
    pub fn new(base_url: &str) -> Result<Self, BoxedError> {
        // A trailing slash keeps `join` from dropping the last path segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        Ok(ToolsClient { http: ReqwestClient::new(), base_url: Url::parse(&normalized)? })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BoxedError> {
        Ok(self.base_url.join(path)?)
    }

    pub async fn list_tools(&self) -> Result<ListToolsResult, BoxedError> {
        let url = self.endpoint("tools")?;
        let resp = self.http.get(url).send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }

    pub async fn list_plugins(&self) -> Result<Vec<PluginDescription>, BoxedError> {
        let url = self.endpoint("plugins")?;
        let resp = self.http.get(url).send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }

    pub async fn call_tool(&self, name: &str, arguments: Map<String, Value>) -> Result<String, BoxedError> {
        let params = CallToolParams { name: name.to_string(), arguments: Some(Value::Object(arguments)) };
        let request = RpcRequest::new(Value::from(1), "tools/call", Some(serde_json::to_value(params)?));
        debug!("Sending {}", serde_json::to_string(&request)?);

        let url = self.endpoint("rpc")?;
        let response: RpcResponse = self.http.post(url).json(&request).send().await?.json().await?;
        if let Some(err) = response.error {
            return Err(Box::new(RemoteError { code: err.code, message: err.message }));
        }
        let result: CallToolResult = serde_json::from_value(response.result.unwrap_or(Value::Null))?;
        Ok(result.joined_text())
    }

    pub async fn run_plugin(&self, name: &str, input: &str) -> Result<String, BoxedError> {
        let url = self.endpoint(&format!("plugins/{}", name))?;
        let resp = self.http.post(url).body(input.to_string()).send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }
}

/// Parse `key=value` into a pair. The value may itself contain `=`.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    // Answers `/rpc` with an error for `unknown` and a text result otherwise.
    async fn stub_rpc(Json(req): Json<Value>) -> Json<Value> {
        let id = req["id"].clone();
        if req["params"]["name"] == "unknown" {
            return Json(json!({"jsonrpc": "2.0", "id": id, "error": {"code": -32601, "message": "Method not found: unknown"}}));
        }
        Json(json!({"jsonrpc": "2.0", "id": id, "result": {"content": [{"type": "text", "text": "Hello, Ada! 👋"}], "isError": false}}))
    }

    async fn spawn_stub() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, Router::new().route("/rpc", post(stub_rpc))).await.unwrap();
        });
        base
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(parse_param("area=TX").unwrap(), ("area".to_string(), "TX".to_string()));
        assert_eq!(parse_param("q=a=b").unwrap(), ("q".to_string(), "a=b".to_string()));
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ToolsClient::new("http://localhost:8000/api/").unwrap();
        assert_eq!(client.endpoint("rpc").unwrap().as_str(), "http://localhost:8000/api/rpc");
        let client = ToolsClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.endpoint("plugins/joke-plugin").unwrap().as_str(), "http://localhost:8000/plugins/joke-plugin");
    }

    #[test]
    fn test_remote_error_display() {
        let err = RemoteError { code: -32601, message: "Method not found: x".into() };
        assert_eq!(err.to_string(), "error -32601: Method not found: x");
    }

    #[tokio::test]
    async fn test_call_tool_returns_text() {
        let client = ToolsClient::new(&spawn_stub().await).unwrap();
        let mut args = Map::new();
        args.insert("name".into(), Value::String("Ada".into()));
        assert_eq!(client.call_tool("hello", args).await.unwrap(), "Hello, Ada! 👋");
    }

    #[tokio::test]
    async fn test_call_tool_error_envelope_is_remote_error() {
        let client = ToolsClient::new(&spawn_stub().await).unwrap();
        let err = client.call_tool("unknown", Map::new()).await.unwrap_err();
        let remote = err.downcast_ref::<RemoteError>().expect("remote error");
        assert_eq!(remote.code, -32601);
        assert_eq!(err.to_string(), "error -32601: Method not found: unknown");
    }
}
