// weather-tools-common/src/error.rs
use crate::{RpcResponse, INVALID_PARAMS, METHOD_NOT_FOUND, UPSTREAM_ERROR};
use serde_json::Value;
use thiserror::Error;

/// Failure of a tool invocation, each variant tied to a fixed JSON-RPC code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Method not found: {0}")]
    UnsupportedMethod(String),
    #[error("Missing required parameter: {0}")]
    MissingParam(String),
    #[error("Invalid params: {0}")]
    InvalidParams(String),
    #[error("{0}")]
    Upstream(String),
}

impl ToolError {
    pub fn code(&self) -> i32 {
        match self {
            ToolError::UnsupportedMethod(_) => METHOD_NOT_FOUND,
            ToolError::MissingParam(_) | ToolError::InvalidParams(_) => INVALID_PARAMS,
            ToolError::Upstream(_) => UPSTREAM_ERROR,
        }
    }

    pub fn into_response(self, id: Value) -> RpcResponse {
        RpcResponse::failure(id, self.code(), self.to_string())
    }
}
