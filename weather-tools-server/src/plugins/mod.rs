// weather-tools-server/src/plugins/mod.rs

pub mod joke;
pub mod weather;

pub use joke::JokePlugin;
pub use weather::WeatherPlugin;
