// weather-tools-server/src/tools/greeting.rs
use crate::plugins::joke::operations::random_joke;
use futures::future::BoxFuture;
use weather_tools_common::{Tool, ToolError, ToolParams};

pub struct HelloTool;

impl Tool for HelloTool {
    fn name(&self) -> &str {
        "hello"
    }

    fn description(&self) -> &str {
        "Return a simple greeting."
    }

    fn required_params(&self) -> Vec<&'static str> {
        vec!["name"]
    }

    fn call<'a>(&'a self, params: &'a ToolParams) -> BoxFuture<'a, Result<String, ToolError>> {
        Box::pin(async move {
            let name = params.require("name")?;
            Ok(format!("Hello, {}! 👋", name))
        })
    }
}

pub struct JokeTool;

impl Tool for JokeTool {
    fn name(&self) -> &str {
        "get_joke"
    }

    fn description(&self) -> &str {
        "Tell a random programming joke."
    }

    fn call<'a>(&'a self, _params: &'a ToolParams) -> BoxFuture<'a, Result<String, ToolError>> {
        Box::pin(async move { Ok(random_joke().to_string()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::joke::operations::JOKES;

    #[tokio::test]
    async fn greets_by_name() {
        let params = ToolParams::new().with("name", "Ada");
        assert_eq!(HelloTool.call(&params).await.unwrap(), "Hello, Ada! 👋");
    }

    #[tokio::test]
    async fn greeting_needs_a_name() {
        let err = HelloTool.call(&ToolParams::new()).await.unwrap_err();
        assert_eq!(err, ToolError::MissingParam("name".into()));
    }

    #[tokio::test]
    async fn joke_ignores_params() {
        let joke = JokeTool.call(&ToolParams::new().with("x", "y")).await.unwrap();
        assert!(JOKES.contains(&joke.as_str()));
    }

    #[test]
    fn default_schema_lists_required_params() {
        let schema = HelloTool.input_schema();
        assert_eq!(schema["required"], serde_json::json!(["name"]));
        assert_eq!(schema["properties"]["name"]["type"], "string");
    }
}
