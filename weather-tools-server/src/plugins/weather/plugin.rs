// weather-tools-server/src/plugins/weather/plugin.rs
use crate::plugins::weather::operations::{self, WeatherInput};
use crate::upstream::WeatherApiClient;
use futures::future::BoxFuture;
use tracing::info;
use weather_tools_common::{Plugin, PluginResponse};

pub struct WeatherPlugin {
    name: String,
    description: String,
    client: WeatherApiClient,
}

impl WeatherPlugin {
    pub fn new(client: WeatherApiClient) -> Self {
        WeatherPlugin {
            name: "weather-plugin".to_string(),
            description: "Get current weather information using either simple text or JSON-RPC".to_string(),
            client,
        }
    }
}

impl Plugin for WeatherPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run<'a>(&'a self, input_text: &'a str) -> BoxFuture<'a, PluginResponse> {
        Box::pin(async move {
            match operations::classify_input(input_text) {
                WeatherInput::Plain(location) => {
                    info!("Plain weather request for: {}", location);
                    let outcome = self.client.current(&location).await;
                    PluginResponse::new(operations::plain_reply(outcome))
                }
                WeatherInput::Rpc { id, location } => {
                    info!("JSON-RPC weather request for: {}", location);
                    let outcome = self.client.current(&location).await;
                    PluginResponse::new(operations::jsonrpc_reply(outcome, id).to_json())
                }
                WeatherInput::BadRpc { id } => {
                    info!("Rejecting JSON-RPC weather request with invalid params");
                    PluginResponse::new(operations::invalid_params(id).to_json())
                }
            }
        })
    }
}
