// weather-tools-server/src/tools/alerts.rs
use crate::tools::value_text;
use crate::upstream::NwsClient;
use futures::future::BoxFuture;
use serde_json::{json, Value};
use tracing::info;
use url::Url;
use weather_tools_common::{Tool, ToolError, ToolParams};

pub const NO_ALERTS: &str = "No active alerts found or unable to retrieve data.";

/// Render one alert feature.
pub fn format_alert(feature: &Value) -> String {
    let props = feature.get("properties").unwrap_or(&Value::Null);
    format!(
        "\nEvent: {}\nArea: {}\nSeverity: {}\nDescription: {}\n",
        value_text(props.get("event"), "Unknown"),
        value_text(props.get("areaDesc"), "Unknown"),
        value_text(props.get("severity"), "Unknown"),
        value_text(props.get("description"), "No description available"),
    )
}

/// Join all features of an alert collection, or the fallback message.
pub fn format_alerts(data: Option<&Value>) -> String {
    let features = match data.and_then(|d| d.get("features")).and_then(|f| f.as_array()) {
        Some(features) if !features.is_empty() => features,
        _ => return NO_ALERTS.to_string(),
    };
    features.iter().map(format_alert).collect::<Vec<_>>().join("\n\n")
}

pub struct AlertsTool {
    nws: NwsClient,
}

impl AlertsTool {
    pub fn new(nws: NwsClient) -> Self {
        AlertsTool { nws }
    }

    fn alerts_url(&self, area: &str) -> Result<Url, ToolError> {
        Url::parse_with_params(&format!("{}/alerts/active", self.nws.base_url()), &[("area", area)])
            .map_err(|e| ToolError::InvalidParams(e.to_string()))
    }
}

impl Tool for AlertsTool {
    fn name(&self) -> &str {
        "get_alerts"
    }

    fn description(&self) -> &str {
        "Get active weather alerts for a given US state (2-letter code). Example: \"TX\" for Texas"
    }

    fn required_params(&self) -> Vec<&'static str> {
        vec!["area"]
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "area": {
                    "type": "string",
                    "description": "Two-letter US state code, e.g. TX"
                }
            },
            "required": ["area"]
        })
    }

    fn call<'a>(&'a self, params: &'a ToolParams) -> BoxFuture<'a, Result<String, ToolError>> {
        Box::pin(async move {
            let area = params.require("area")?.trim().to_uppercase();
            let url = self.alerts_url(&area)?;
            info!("Fetching active alerts for area: {}", area);
            let data = self.nws.get_json(url.as_str()).await;
            Ok(format_alerts(data.as_ref()))
        })
    }
}
