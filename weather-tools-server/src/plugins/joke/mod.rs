// weather-tools-server/src/plugins/joke/mod.rs
pub mod operations;
mod plugin;

pub use plugin::JokePlugin;
use std::sync::Arc;
use weather_tools_common::Plugin;

/// Create a new Joke plugin
pub fn create_plugin() -> Arc<dyn Plugin> {
    Arc::new(JokePlugin::new())
}
