use std::{future::Future, io, sync::Arc};

use axum::{
    http::{Method, Uri},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    app_state::AppState,
    config::Config,
    error::{AppError, StartupError},
    routes,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/",            get(routes::root::handler))
        .route("/health",      get(routes::health::handler))
        .route("/api/version", get(routes::version::handler))
        .fallback(not_found)
        // The frontend may be served from a different origin than the API.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound { method, path: uri.path().to_string() }
}

/// Bind the configured host and port. The host may be an IPv4 or IPv6
/// literal or a name that resolves, e.g. `localhost`.
pub async fn bind(config: &Config) -> Result<TcpListener, StartupError> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| StartupError::Bind { addr: config.addr(), source })
}

/// Serve `state` on an already-bound listener until `shutdown` resolves.
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl+C, or on SIGTERM where the platform has it.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c    => tracing::info!("Ctrl+C received, stopping"),
        _ = terminate => tracing::info!("SIGTERM received, stopping"),
    }
}
