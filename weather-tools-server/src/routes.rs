// weather-tools-server/src/routes.rs
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use serde_json::Value;
use weather_tools_common::{ListToolsResult, Plugin, PluginDescription, RpcResponse, PARSE_ERROR};

use crate::admin;
use crate::state::AppState;
use crate::traits::MessageHandler;

/// Build the router for every endpoint.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/rpc", post(handle_rpc))
        .route("/tools", get(list_tools))
        .route("/plugins", get(list_plugins))
        .route("/plugins/:name", post(run_plugin))
        .route("/api/stats", get(admin::get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// Errors travel inside the envelope, so the status is always 200.
async fn handle_rpc(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    state.request_count.fetch_add(1, Ordering::SeqCst);
    let response_body = match String::from_utf8(body.to_vec()) {
        Ok(text) => state.message_handler.handle_message(text).await,
        Err(e) => {
            warn!("Parse error: {}", e);
            RpcResponse::failure(Value::Null, PARSE_ERROR, format!("Parse error: {}", e)).to_json()
        }
    };
    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], response_body).into_response()
}

async fn list_tools(State(state): State<Arc<AppState>>) -> Json<ListToolsResult> {
    state.request_count.fetch_add(1, Ordering::SeqCst);
    Json(ListToolsResult { tools: state.tools.descriptions() })
}

async fn list_plugins(State(state): State<Arc<AppState>>) -> Json<Vec<PluginDescription>> {
    state.request_count.fetch_add(1, Ordering::SeqCst);
    Json(state.plugins.descriptions())
}

async fn run_plugin(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: String,
) -> Response {
    state.request_count.fetch_add(1, Ordering::SeqCst);
    let Some(plugin) = state.plugins.get(&name) else {
        warn!("Plugin not found: {}", name);
        return (StatusCode::NOT_FOUND, format!("Plugin '{}' not found", name)).into_response();
    };

    info!("Running plugin {}", name);
    let response = plugin.run(&body).await;
    let content_type = if response.is_json() { "application/json" } else { "text/plain; charset=utf-8" };
    (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], response.text).into_response()
}
