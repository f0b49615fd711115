// weather-tools-server/src/admin.rs
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::state::AppState;

// Get server statistics
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "request_count": state.request_count.load(Ordering::SeqCst),
        "started_at": state.started_at.to_rfc3339(),
        "uptime_seconds": state.startup_time.elapsed().as_secs(),
        "tool_count": state.tools.len(),
        "plugin_count": state.plugins.len(),
    }))
}
