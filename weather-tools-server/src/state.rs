// weather-tools-server/src/state.rs
use crate::config::ServerConfig;
use crate::message_handler::ToolMessageHandler;
use crate::plugins::{joke, weather};
use crate::registry::{PluginRegistry, ToolRegistry};
use crate::tools::{AlertsTool, CurrentWeatherTool, ForecastTool, HelloTool, JokeTool};
use crate::upstream::{build_http_client, NwsClient, WeatherApiClient};
use chrono::{DateTime, Utc};
use std::{error::Error, sync::atomic::AtomicUsize, sync::Arc, time::Instant};
use tracing::info;

// --- Shared Application State ---
pub struct AppState {
    pub tools: Arc<ToolRegistry>,
    pub plugins: Arc<PluginRegistry>,
    pub message_handler: Arc<ToolMessageHandler>,
    pub request_count: AtomicUsize,
    pub started_at: DateTime<Utc>,
    pub startup_time: Instant,
}

impl AppState {
    pub fn new(tools: ToolRegistry, plugins: PluginRegistry) -> Self {
        let tools = Arc::new(tools);
        AppState {
            message_handler: Arc::new(ToolMessageHandler::new(tools.clone())),
            tools,
            plugins: Arc::new(plugins),
            request_count: AtomicUsize::new(0),
            started_at: Utc::now(),
            startup_time: Instant::now(),
        }
    }

    /// Wire every tool and plugin against the configured upstreams.
    pub fn from_config(config: &ServerConfig) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let http = build_http_client(config)?;
        let nws = NwsClient::new(http.clone(), &config.nws_api_base, &config.user_agent);
        let weather_api = WeatherApiClient::new(http, &config.weather_api_base, &config.weather_api_key);

        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(AlertsTool::new(nws.clone())))?;
        tools.register(Arc::new(ForecastTool::new(nws)))?;
        tools.register(Arc::new(CurrentWeatherTool::new(weather_api.clone())))?;
        tools.register(Arc::new(HelloTool))?;
        tools.register(Arc::new(JokeTool))?;

        let mut plugins = PluginRegistry::new();
        plugins.register(weather::create_plugin(weather_api))?;
        plugins.register(joke::create_plugin())?;

        info!("Registered {} tools and {} plugins", tools.len(), plugins.len());
        Ok(Self::new(tools, plugins))
    }
}
