use std::io;

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything that can stop the service before it starts accepting requests.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("PORT must be between 1 and 65535")]
    InvalidPort,

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr:   String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot {method} {path}")]
    NotFound { method: Method, path: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        };

        tracing::debug!(error = %self);

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
