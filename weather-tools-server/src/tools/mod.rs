// weather-tools-server/src/tools/mod.rs
pub mod alerts;
pub mod current;
pub mod forecast;
pub mod greeting;

pub use alerts::AlertsTool;
pub use current::CurrentWeatherTool;
pub use forecast::ForecastTool;
pub use greeting::{HelloTool, JokeTool};

use serde_json::Value;

/// Text of an optional JSON field: strings unquoted, null/missing as `default`.
pub(crate) fn value_text(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_text_unquotes_strings() {
        assert_eq!(value_text(Some(&json!("Severe")), "Unknown"), "Severe");
        assert_eq!(value_text(Some(&json!(72)), "Unknown"), "72");
        assert_eq!(value_text(Some(&Value::Null), "Unknown"), "Unknown");
        assert_eq!(value_text(None, "n/a"), "n/a");
    }
}
