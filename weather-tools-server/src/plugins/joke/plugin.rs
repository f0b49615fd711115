// weather-tools-server/src/plugins/joke/plugin.rs
use crate::plugins::joke::operations;
use futures::future::BoxFuture;
use tracing::info;
use weather_tools_common::{Plugin, PluginResponse};

pub struct JokePlugin {
    name: String,
    description: String,
}

impl JokePlugin {
    pub fn new() -> Self {
        JokePlugin {
            name: "joke-plugin".to_string(),
            description: "Tells a random joke using method 'getJoke'".to_string(),
        }
    }
}

impl Plugin for JokePlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run<'a>(&'a self, input_text: &'a str) -> BoxFuture<'a, PluginResponse> {
        Box::pin(async move {
            let response = operations::answer(input_text);
            if response.is_error() {
                info!("Joke request rejected");
            }
            PluginResponse::new(response.to_json())
        })
    }
}
