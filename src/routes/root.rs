use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{app_state::AppState, process_info};

pub async fn handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let config = &state.config;

    Json(json!({
        "message":     config.deploy_target.greeting(),
        "timestamp":   process_info::iso_timestamp(),
        "environment": config.environment,
        "hostname":    config.hostname,
    }))
}
