use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{app_state::AppState, process_info};

pub async fn handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "uptime": process_info::uptime_seconds(state.started_at),
        "memory": process_info::memory_usage(),
    }))
}
