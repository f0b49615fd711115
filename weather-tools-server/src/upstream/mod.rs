// weather-tools-server/src/upstream/mod.rs
pub mod nws;
pub mod weatherapi;

pub use nws::NwsClient;
pub use weatherapi::{CurrentConditions, UpstreamError, WeatherApiClient};

use crate::config::ServerConfig;
use std::time::Duration;

/// Shared HTTP client for all upstream calls.
pub fn build_http_client(config: &ServerConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
}
