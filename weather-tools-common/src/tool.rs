// weather-tools-common/src/tool.rs
use crate::{ToolDescription, ToolError};
use futures::future::BoxFuture;
use serde_json::Value;
use std::collections::HashMap;

/// String parameters of a single tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolParams {
    values: HashMap<String, String>,
}

impl ToolParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON-RPC `params` value. Scalars are stringified,
    /// nested arrays/objects are rejected.
    pub fn from_value(params: Option<&Value>) -> Result<Self, ToolError> {
        let mut values = HashMap::new();
        let obj = match params {
            None | Some(Value::Null) => return Ok(ToolParams { values }),
            Some(Value::Object(obj)) => obj,
            Some(_) => return Err(ToolError::InvalidParams("params must be an object".to_string())),
        };

        for (key, value) in obj {
            if value.is_null() {
                continue;
            }
            let text = scalar_text(value)
                .ok_or_else(|| ToolError::InvalidParams(format!("parameter '{}' must be a string", key)))?;
            values.insert(key.clone(), text);
        }
        Ok(ToolParams { values })
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Fetch a parameter that must be present and non-blank.
    pub fn require(&self, key: &str) -> Result<&str, ToolError> {
        match self.get(key) {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ToolError::MissingParam(key.to_string())),
        }
    }
}

/// Text form of a JSON scalar parameter; `None` for null, arrays and objects.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A named callable exposed to clients.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Names of parameters the tool cannot run without.
    fn required_params(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// JSON schema for the tool's arguments. The default lists the
    /// required parameters as strings.
    fn input_schema(&self) -> Value {
        let required = self.required_params();
        let properties: serde_json::Map<String, Value> = required
            .iter()
            .map(|p| (p.to_string(), serde_json::json!({ "type": "string" })))
            .collect();
        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    fn call<'a>(&'a self, params: &'a ToolParams) -> BoxFuture<'a, Result<String, ToolError>>;

    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_are_stringified() {
        let params = ToolParams::from_value(Some(&json!({"latitude": 38.5, "area": "TX", "x": null}))).unwrap();
        assert_eq!(params.get("latitude"), Some("38.5"));
        assert_eq!(params.get("area"), Some("TX"));
        assert_eq!(params.get("x"), None);
    }

    #[test]
    fn scalar_text_covers_scalars_only() {
        assert_eq!(scalar_text(&json!(10001)), Some("10001".to_string()));
        assert_eq!(scalar_text(&json!(true)), Some("true".to_string()));
        assert_eq!(scalar_text(&json!(null)), None);
        assert_eq!(scalar_text(&json!({"zip": 1})), None);
    }

    #[test]
    fn nested_values_are_invalid() {
        let err = ToolParams::from_value(Some(&json!({"area": ["TX"]}))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidParams(_)));
        let err = ToolParams::from_value(Some(&json!(["TX"]))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidParams(_)));
    }

    #[test]
    fn require_rejects_blank() {
        let params = ToolParams::new().with("area", "  ");
        assert_eq!(params.require("area"), Err(ToolError::MissingParam("area".into())));
        assert_eq!(params.require("name"), Err(ToolError::MissingParam("name".into())));
    }
}
