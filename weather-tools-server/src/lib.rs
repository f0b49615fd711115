// weather-tools-server/src/lib.rs
//! HTTP server exposing weather, greeting and joke tools over JSON-RPC,
//! plus text-in/text-out plugins.

pub mod admin;
pub mod config;
pub mod message_handler;
pub mod plugins;
pub mod registry;
pub mod routes;
pub mod state;
pub mod tools;
pub mod traits;
pub mod upstream;

pub use config::ServerConfig;
pub use routes::create_router;
pub use state::AppState;
