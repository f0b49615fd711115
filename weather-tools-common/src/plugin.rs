// weather-tools-common/src/plugin.rs
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

/// Text produced by a plugin run. May itself be a JSON-RPC envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PluginResponse {
    pub text: String,
}

impl PluginResponse {
    pub fn new(text: impl Into<String>) -> Self {
        PluginResponse { text: text.into() }
    }

    /// Whether the text parses as a JSON object.
    pub fn is_json(&self) -> bool {
        serde_json::from_str::<serde_json::Value>(&self.text)
            .map(|v| v.is_object())
            .unwrap_or(false)
    }
}

/// Trait that defines the interface for text-in/text-out plugins
pub trait Plugin: Send + Sync {
    /// Get the unique name of this plugin
    fn name(&self) -> &str;

    /// Get plugin description
    fn description(&self) -> &str;

    /// Run the plugin on raw input text. Failures are reported in the
    /// returned text, never as an Err.
    fn run<'a>(&'a self, input_text: &'a str) -> BoxFuture<'a, PluginResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_json_envelopes() {
        assert!(PluginResponse::new(r#"{"jsonrpc":"2.0","result":"x","id":1}"#).is_json());
        assert!(!PluginResponse::new("Error: bad key").is_json());
        assert!(!PluginResponse::new("42").is_json());
    }
}
