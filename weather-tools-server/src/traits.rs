// weather-tools-server/src/traits.rs
use futures::future::BoxFuture;

/// Turns one raw request body into one response body.
pub trait MessageHandler: Send + Sync {
    fn handle_message<'a>(&'a self, message: String) -> BoxFuture<'a, String>;
}
