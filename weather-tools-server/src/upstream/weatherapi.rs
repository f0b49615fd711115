// weather-tools-server/src/upstream/weatherapi.rs
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The API answered with its own `error.message`.
    #[error("{0}")]
    Api(String),
    #[error("weather service unavailable: {0}")]
    Transport(String),
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: LocationBlock,
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct LocationBlock {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temp_c: f64,
    condition: ConditionBlock,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    text: String,
}

/// One current-conditions reading.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    pub temp_c: f64,
    pub condition: String,
}

impl CurrentConditions {
    /// Celsius as the API reports it: whole values keep one decimal place.
    pub fn temperature_text(&self) -> String {
        if self.temp_c.is_finite() && self.temp_c.fract() == 0.0 {
            format!("{:.1}", self.temp_c)
        } else {
            self.temp_c.to_string()
        }
    }

    pub fn parse(body: &Value) -> Result<Self, UpstreamError> {
        if let Some(message) = body.get("error").and_then(|e| e.get("message")).and_then(|m| m.as_str()) {
            return Err(UpstreamError::Api(message.to_string()));
        }
        let resp: CurrentResponse = serde_json::from_value(body.clone())
            .map_err(|e| UpstreamError::Transport(format!("unexpected response: {}", e)))?;
        Ok(CurrentConditions {
            city: resp.location.name,
            country: resp.location.country,
            temp_c: resp.current.temp_c,
            condition: resp.current.condition.text,
        })
    }
}

/// Client for the third-party current-conditions API.
#[derive(Clone)]
pub struct WeatherApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        WeatherApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn current_url(&self, location: &str) -> Result<Url, UpstreamError> {
        Url::parse_with_params(
            &format!("{}/current.json", self.base_url),
            &[("key", self.api_key.as_str()), ("q", location)],
        )
        .map_err(|e| UpstreamError::Transport(format!("bad url: {}", e)))
    }

    pub async fn current(&self, location: &str) -> Result<CurrentConditions, UpstreamError> {
        let url = self.current_url(location)?;
        info!("Fetching current weather for: {}", location);

        // Error bodies come back with 4xx statuses, so the status is not checked.
        let response = self.http.get(url).send().await.map_err(|e| {
            warn!("Weather API request failed: {}", e);
            UpstreamError::Transport(e.to_string())
        })?;
        let body: Value = response.json().await.map_err(|e| {
            warn!("Weather API response was not JSON: {}", e);
            UpstreamError::Transport(e.to_string())
        })?;

        CurrentConditions::parse(&body)
    }
}
