// weather-tools-server/src/upstream/nws.rs
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;
use tracing::{debug, warn};

const GEO_JSON: &str = "application/geo+json";

/// Client for the National Weather Service API.
#[derive(Clone)]
pub struct NwsClient {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl NwsClient {
    pub fn new(http: reqwest::Client, base_url: &str, user_agent: &str) -> Self {
        NwsClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a GeoJSON document. Any failure (transport, status, decode) is
    /// logged and collapsed to `None`.
    pub async fn get_json(&self, url: &str) -> Option<Value> {
        debug!("NWS GET {}", url);
        let response = match self
            .http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, GEO_JSON)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("NWS request to {} failed: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("NWS returned status {} for {}", status, url);
            return None;
        }

        match response.json::<Value>().await {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("NWS response from {} was not JSON: {}", url, e);
                None
            }
        }
    }
}
