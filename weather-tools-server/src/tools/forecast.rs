// weather-tools-server/src/tools/forecast.rs
use crate::tools::value_text;
use crate::upstream::NwsClient;
use futures::future::BoxFuture;
use serde_json::{json, Value};
use tracing::{info, warn};
use weather_tools_common::{Tool, ToolError, ToolParams};

pub const NO_POINT_DATA: &str = "Unable to fetch forecast data for this location.";
pub const NO_FORECAST: &str = "Unable to fetch detailed forecast.";
const MAX_PERIODS: usize = 5;

pub fn format_period(period: &Value) -> String {
    format!(
        "\n{}:\nTemperature: {}°{}\nWind: {} {}\nForecast: {}\n",
        value_text(period.get("name"), "Unknown"),
        value_text(period.get("temperature"), "Unknown"),
        value_text(period.get("temperatureUnit"), ""),
        value_text(period.get("windSpeed"), "Unknown"),
        value_text(period.get("windDirection"), ""),
        value_text(period.get("detailedForecast"), "No forecast available"),
    )
}

/// Render the next periods of a gridpoint forecast.
pub fn format_forecast(data: &Value) -> String {
    let periods = data
        .get("properties")
        .and_then(|p| p.get("periods"))
        .and_then(|p| p.as_array());
    match periods {
        Some(periods) if !periods.is_empty() => periods
            .iter()
            .take(MAX_PERIODS)
            .map(format_period)
            .collect::<Vec<_>>()
            .join("\n---\n"),
        _ => NO_FORECAST.to_string(),
    }
}

fn parse_coordinate(params: &ToolParams, key: &str, limit: f64) -> Result<f64, ToolError> {
    let raw = params.require(key)?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ToolError::InvalidParams(format!("{} must be a number, got '{}'", key, raw)))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(ToolError::InvalidParams(format!("{} out of range: {}", key, value)));
    }
    Ok(value)
}

pub struct ForecastTool {
    nws: NwsClient,
}

impl ForecastTool {
    pub fn new(nws: NwsClient) -> Self {
        ForecastTool { nws }
    }
}

impl Tool for ForecastTool {
    fn name(&self) -> &str {
        "get_forecast"
    }

    fn description(&self) -> &str {
        "Get the weather forecast for a location given its latitude and longitude"
    }

    fn required_params(&self) -> Vec<&'static str> {
        vec!["latitude", "longitude"]
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "latitude": { "type": "string", "description": "Latitude of the location" },
                "longitude": { "type": "string", "description": "Longitude of the location" }
            },
            "required": ["latitude", "longitude"]
        })
    }

    fn call<'a>(&'a self, params: &'a ToolParams) -> BoxFuture<'a, Result<String, ToolError>> {
        Box::pin(async move {
            let latitude = parse_coordinate(params, "latitude", 90.0)?;
            let longitude = parse_coordinate(params, "longitude", 180.0)?;

            let points_url = format!("{}/points/{},{}", self.nws.base_url(), latitude, longitude);
            info!("Resolving forecast grid for {},{}", latitude, longitude);
            let forecast_url = match self.nws.get_json(&points_url).await {
                Some(points) => points
                    .get("properties")
                    .and_then(|p| p.get("forecast"))
                    .and_then(|f| f.as_str())
                    .map(str::to_string),
                None => None,
            };
            let Some(forecast_url) = forecast_url else {
                warn!("No forecast grid for {},{}", latitude, longitude);
                return Ok(NO_POINT_DATA.to_string());
            };

            match self.nws.get_json(&forecast_url).await {
                Some(forecast) => Ok(format_forecast(&forecast)),
                None => Ok(NO_FORECAST.to_string()),
            }
        })
    }
}
