// weather-tools-server/src/plugins/weather/operations.rs
use crate::upstream::{CurrentConditions, UpstreamError};
use serde_json::Value;
use weather_tools_common::{scalar_text, RpcResponse, INVALID_PARAMS, UPSTREAM_ERROR};

/// Sentence used for plain-text replies
pub fn describe_current(c: &CurrentConditions) -> String {
    format!(
        "The current weather in {}, {} is {} with {}°C.",
        c.city, c.country, c.condition, c.temperature_text()
    )
}

/// Sentence used for JSON-RPC replies and the `get_weather` tool
pub fn describe_weather(c: &CurrentConditions) -> String {
    format!(
        "The weather in {}, {} is {} with {}°C.",
        c.city, c.country, c.condition, c.temperature_text()
    )
}

pub fn plain_reply(outcome: Result<CurrentConditions, UpstreamError>) -> String {
    match outcome {
        Ok(c) => describe_current(&c),
        Err(e) => format!("Error: {}", e),
    }
}

pub fn jsonrpc_reply(outcome: Result<CurrentConditions, UpstreamError>, id: Value) -> RpcResponse {
    match outcome {
        Ok(c) => RpcResponse::success(id, describe_weather(&c)),
        Err(e) => RpcResponse::failure(id, UPSTREAM_ERROR, e.to_string()),
    }
}

pub fn invalid_params(id: Value) -> RpcResponse {
    RpcResponse::failure(id, INVALID_PARAMS, "Invalid params")
}

/// Classification of raw plugin input.
#[derive(Debug, PartialEq)]
pub enum WeatherInput {
    Plain(String),
    Rpc { id: Value, location: String },
    BadRpc { id: Value },
}

/// JSON objects carrying a `jsonrpc` key are JSON-RPC; anything else is a
/// plain location.
pub fn classify_input(input_text: &str) -> WeatherInput {
    let data: Value = match serde_json::from_str(input_text) {
        Ok(v @ Value::Object(_)) => v,
        _ => return WeatherInput::Plain(input_text.trim().to_string()),
    };
    if data.get("jsonrpc").is_none() {
        return WeatherInput::Plain(input_text.trim().to_string());
    }

    let id = data.get("id").cloned().unwrap_or(Value::Null);
    if data.get("method").and_then(|m| m.as_str()) != Some("getWeather") {
        return WeatherInput::BadRpc { id };
    }
    let location = data
        .get("params")
        .and_then(|p| p.get("location"))
        .and_then(scalar_text)
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());
    match location {
        Some(location) => WeatherInput::Rpc { id, location },
        None => WeatherInput::BadRpc { id },
    }
}
