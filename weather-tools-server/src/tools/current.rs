// weather-tools-server/src/tools/current.rs
use crate::plugins::weather::operations::describe_weather;
use crate::upstream::WeatherApiClient;
use futures::future::BoxFuture;
use serde_json::{json, Value};
use weather_tools_common::{Tool, ToolError, ToolParams};

/// Current conditions from the third-party weather API.
pub struct CurrentWeatherTool {
    client: WeatherApiClient,
}

impl CurrentWeatherTool {
    pub fn new(client: WeatherApiClient) -> Self {
        CurrentWeatherTool { client }
    }
}

impl Tool for CurrentWeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Get current weather information for a city or place name"
    }

    fn required_params(&self) -> Vec<&'static str> {
        vec!["location"]
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "location": { "type": "string", "description": "City or place name, e.g. London" }
            },
            "required": ["location"]
        })
    }

    fn call<'a>(&'a self, params: &'a ToolParams) -> BoxFuture<'a, Result<String, ToolError>> {
        Box::pin(async move {
            let location = params.require("location")?.trim();
            let conditions = self
                .client
                .current(location)
                .await
                .map_err(|e| ToolError::Upstream(e.to_string()))?;
            Ok(describe_weather(&conditions))
        })
    }
}
