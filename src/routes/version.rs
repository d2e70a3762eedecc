use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{app_state::AppState, process_info};

pub async fn handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "version":     env!("CARGO_PKG_VERSION"),
        "ci_cd":       state.config.deploy_target.ci_cd_label(),
        "deployed_at": process_info::iso_timestamp(),
    }))
}
