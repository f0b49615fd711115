// weather-tools-server/src/plugins/weather/mod.rs
pub mod operations;
mod plugin;

pub use plugin::WeatherPlugin;
use crate::upstream::WeatherApiClient;
use std::sync::Arc;
use weather_tools_common::Plugin;

/// Create a new Weather plugin
pub fn create_plugin(client: WeatherApiClient) -> Arc<dyn Plugin> {
    Arc::new(WeatherPlugin::new(client))
}
