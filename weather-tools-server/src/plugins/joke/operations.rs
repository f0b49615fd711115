// weather-tools-server/src/plugins/joke/operations.rs
use serde_json::Value;
use weather_tools_common::{RpcResponse, METHOD_NOT_FOUND};

pub const JOKES: [&str; 3] = [
    "Why did the developer go broke? Because they used up all their cache.",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "Why did the function stop calling? Because it had too many arguments.",
];

pub fn random_joke() -> &'static str {
    JOKES[fastrand::usize(..JOKES.len())]
}

/// Answer a raw joke request. Input must be JSON with `method == "getJoke"`.
pub fn answer(input_text: &str) -> RpcResponse {
    let data: Value = match serde_json::from_str(input_text) {
        Ok(v) => v,
        Err(e) => return RpcResponse::failure(Value::Null, METHOD_NOT_FOUND, e.to_string()),
    };
    let id = data.get("id").cloned().unwrap_or(Value::Null);
    if data.get("method").and_then(|m| m.as_str()) != Some("getJoke") {
        return RpcResponse::failure(id, METHOD_NOT_FOUND, "Unsupported method");
    }
    RpcResponse::success(id, random_joke())
}
